#[cfg(feature = "cairo-backend")]
use graph_views::api::{
    BarGraphViewConfig, CircularProgressConfig, CircularProgressView, LineGraphViewConfig,
    PieGraphViewConfig,
};
#[cfg(feature = "cairo-backend")]
use graph_views::core::{EdgeInsets, GlowMode, Graph, GraphKind, GraphRange, Rect};
#[cfg(feature = "cairo-backend")]
use graph_views::error::ChartResult;
#[cfg(feature = "cairo-backend")]
use graph_views::render::{BarFill, CairoRenderer, Color};
#[cfg(feature = "cairo-backend")]
use std::fs::{self, File};
#[cfg(feature = "cairo-backend")]
use std::path::PathBuf;

#[cfg(feature = "cairo-backend")]
const DEFAULT_OUTPUT_ROOT: &str = "target/gallery";
#[cfg(feature = "cairo-backend")]
const GALLERY_WIDTH: i32 = 320;
#[cfg(feature = "cairo-backend")]
const GALLERY_HEIGHT: i32 = 240;

#[cfg(feature = "cairo-backend")]
struct CliArgs {
    output_root: PathBuf,
    only_entry_id: Option<String>,
}

#[cfg(feature = "cairo-backend")]
type GalleryRenderFn = fn(Rect) -> ChartResult<CairoRenderer>;

#[cfg(feature = "cairo-backend")]
const GALLERY: &[(&str, GalleryRenderFn)] = &[
    ("bar_mixed_sign", render_bar_mixed_sign),
    ("bar_gradient_rounded", render_bar_gradient_rounded),
    ("line_keyed", render_line_keyed),
    ("pie_seeded", render_pie_seeded),
    ("pie_donut_custom_colors", render_pie_donut),
    ("progress_gradient", render_progress_gradient),
    ("progress_lerp_glow", render_progress_lerp_glow),
];

#[cfg(feature = "cairo-backend")]
fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

#[cfg(not(feature = "cairo-backend"))]
fn main() {
    eprintln!("this tool requires feature `cairo-backend`");
    std::process::exit(1);
}

#[cfg(feature = "cairo-backend")]
fn run() -> Result<(), String> {
    let args = parse_args()?;
    fs::create_dir_all(&args.output_root).map_err(|err| {
        format!(
            "failed to create output root `{}`: {err}",
            args.output_root.display()
        )
    })?;

    let bounds = Rect::from_size(f64::from(GALLERY_WIDTH), f64::from(GALLERY_HEIGHT));
    let mut generated_count = 0usize;
    for (id, render) in GALLERY {
        if args
            .only_entry_id
            .as_ref()
            .is_some_and(|only| only != id)
        {
            continue;
        }

        let renderer = render(bounds).map_err(|err| format!("failed to render `{id}`: {err}"))?;
        let path = args.output_root.join(format!("{id}.png"));
        let mut file = File::create(&path)
            .map_err(|err| format!("failed to create `{}`: {err}", path.display()))?;
        renderer
            .write_png(&mut file)
            .map_err(|err| format!("failed to write `{}`: {err}", path.display()))?;
        println!("wrote {}", path.display());
        generated_count += 1;
    }

    if generated_count == 0 {
        return Err("no gallery entry matched the requested id".to_owned());
    }
    Ok(())
}

#[cfg(feature = "cairo-backend")]
fn new_renderer() -> ChartResult<CairoRenderer> {
    CairoRenderer::new(GALLERY_WIDTH, GALLERY_HEIGHT)
}

#[cfg(feature = "cairo-backend")]
fn render_bar_mixed_sign(bounds: Rect) -> ChartResult<CairoRenderer> {
    let graph = Graph::bar([8, 12, 20, -10, 6], Some(GraphRange::new(-20, 20)?));
    let mut view = graph.view_with_renderer(new_renderer()?, bounds)?;
    view.set_bar_config(BarGraphViewConfig::default().with_content_insets(EdgeInsets::all(16.0)))?;
    view.render()?;
    Ok(view.into_renderer())
}

#[cfg(feature = "cairo-backend")]
fn render_bar_gradient_rounded(bounds: Rect) -> ChartResult<CairoRenderer> {
    let graph = Graph::bar([3.5, 7.25, 5.0, 9.75, 2.0], Some(GraphRange::new(0.0, 10.0)?))
        .with_text_display(|unit, _total| Some(format!("{:.1}", unit.value)));
    let config = BarGraphViewConfig {
        rounded_corners: true,
        zero_line_visible: false,
        ..BarGraphViewConfig::default()
            .with_fill(BarFill::Gradient(vec![
                Color::from_hex("#FF6F61"),
                Color::from_hex("#6B5B95"),
            ]))
            .with_content_insets(EdgeInsets::symmetric(12.0, 20.0))
    };
    let mut view = graph.view_with_renderer(new_renderer()?, bounds)?;
    view.set_bar_config(config)?;
    view.render()?;
    Ok(view.into_renderer())
}

#[cfg(feature = "cairo-backend")]
fn render_line_keyed(bounds: Rect) -> ChartResult<CairoRenderer> {
    let graph = Graph::from_keyed_collection(
        GraphKind::Line,
        [("mon", 4), ("tue", 9), ("wed", 6), ("thu", 12), ("fri", 8)],
        Some(GraphRange::new(0, 15)?),
    );
    let mut view = graph.view_with_renderer(new_renderer()?, bounds)?;
    view.set_line_config(LineGraphViewConfig {
        content_insets: EdgeInsets::all(16.0),
        ..LineGraphViewConfig::default()
    })?;
    view.render()?;
    Ok(view.into_renderer())
}

#[cfg(feature = "cairo-backend")]
fn render_pie_seeded(bounds: Rect) -> ChartResult<CairoRenderer> {
    let mut view = Graph::pie([75, 25, 40, 10]).view_with_renderer(new_renderer()?, bounds)?;
    view.set_pie_config(PieGraphViewConfig::default().with_color_seed(42))?;
    view.render()?;
    Ok(view.into_renderer())
}

#[cfg(feature = "cairo-backend")]
fn render_pie_donut(bounds: Rect) -> ChartResult<CairoRenderer> {
    let mut view = Graph::pie([3.0, 1.0, 2.0]).view_with_renderer(new_renderer()?, bounds)?;
    view.set_pie_config(
        PieGraphViewConfig::default()
            .with_donut(true)
            .with_colors(vec![
                Color::from_hex("#4DC2AB"),
                Color::from_hex("#FF0066"),
                Color::from_hex("#333333"),
            ]),
    )?;
    view.render()?;
    Ok(view.into_renderer())
}

#[cfg(feature = "cairo-backend")]
fn render_progress_gradient(bounds: Rect) -> ChartResult<CairoRenderer> {
    let config = CircularProgressConfig {
        gradient_rotate_speed: 1.0,
        track_color: Color::from_hex("#DDDDDD"),
        ..CircularProgressConfig::default().with_colors(vec![
            Color::from_hex("#FF6F61"),
            Color::from_hex("#6B5B95"),
            Color::CYAN,
        ])
    };
    let mut view = CircularProgressView::with_config(new_renderer()?, bounds, config)?;
    view.set_angle(250.0);
    view.render()?;
    Ok(view.into_renderer())
}

#[cfg(feature = "cairo-backend")]
fn render_progress_lerp_glow(bounds: Rect) -> ChartResult<CairoRenderer> {
    let config = CircularProgressConfig {
        lerp_color_mode: true,
        clockwise: false,
        progress_inside_fill_color: Some(Color::from_hex("#1E1E1E")),
        ..CircularProgressConfig::default()
            .with_colors(vec![Color::from_hex("#4DC2AB"), Color::from_hex("#FF0066")])
            .with_glow(GlowMode::Forward, 1.0)
    };
    let mut view = CircularProgressView::with_config(new_renderer()?, bounds, config)?;
    view.set_angle(200.0);
    view.render()?;
    Ok(view.into_renderer())
}

#[cfg(feature = "cairo-backend")]
fn parse_args() -> Result<CliArgs, String> {
    let mut output_root = PathBuf::from(DEFAULT_OUTPUT_ROOT);
    let mut only_entry_id: Option<String> = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--output-root" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output-root".to_owned())?;
                output_root = PathBuf::from(value);
            }
            "--only" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --only".to_owned())?;
                only_entry_id = Some(value);
            }
            "--help" | "-h" => {
                println!("usage: render_gallery_pngs [--output-root <dir>] [--only <entry-id>]");
                std::process::exit(0);
            }
            other => return Err(format!("unknown argument: {other}")),
        }
    }

    Ok(CliArgs {
        output_root,
        only_entry_id,
    })
}
