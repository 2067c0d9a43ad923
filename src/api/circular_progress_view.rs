use std::sync::Arc;

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

use tracing::{debug, trace};

use crate::core::Rect;
use crate::error::ChartResult;
use crate::render::{Color, RenderFrame, Renderer};

use super::{
    AngleAnimation, AnimationCompletion, AnimationTiming, CircularProgressConfig,
    ProgressTextFormatter, build_progress_frame,
};

/// Stateful circular progress indicator.
///
/// Holds the model angle, style and an optional in-flight animation, and
/// rebuilds its frame from them on every redraw. Animations are advanced by
/// the host through `tick`, typically from a frame clock.
pub struct CircularProgressView<R: Renderer> {
    renderer: R,
    bounds: Rect,
    config: CircularProgressConfig,
    angle: f64,
    animation: Option<AngleAnimation>,
    text_formatter: Option<ProgressTextFormatter>,
    needs_display: bool,
    frames_rendered: usize,
}

impl<R: Renderer> CircularProgressView<R> {
    pub fn new(renderer: R, bounds: Rect) -> ChartResult<Self> {
        Self::with_config(renderer, bounds, CircularProgressConfig::default())
    }

    pub fn with_config(
        renderer: R,
        bounds: Rect,
        config: CircularProgressConfig,
    ) -> ChartResult<Self> {
        bounds.validate_drawable()?;
        config.validate()?;
        Ok(Self {
            renderer,
            bounds,
            config,
            angle: 0.0,
            animation: None,
            text_formatter: None,
            needs_display: true,
            frames_rendered: 0,
        })
    }

    #[must_use]
    pub fn config(&self) -> &CircularProgressConfig {
        &self.config
    }

    /// Replaces the whole style and schedules one redraw.
    pub fn set_config(&mut self, config: CircularProgressConfig) -> ChartResult<()> {
        config.validate()?;
        debug!(
            glow_mode = ?config.glow_mode,
            colors = config.colors.len(),
            "set circular progress config"
        );
        self.config = config;
        self.needs_display = true;
        Ok(())
    }

    /// Replaces the progress colors.
    pub fn set_colors(&mut self, colors: Vec<Color>) -> ChartResult<()> {
        let config = CircularProgressConfig {
            colors,
            ..self.config.clone()
        };
        self.set_config(config)
    }

    /// Replaces the default percentage text.
    pub fn set_text_formatter<F>(&mut self, formatter: F)
    where
        F: Fn(f64) -> String + Send + Sync + 'static,
    {
        self.text_formatter = Some(Arc::new(formatter));
        self.needs_display = true;
    }

    pub fn clear_text_formatter(&mut self) {
        self.text_formatter = None;
        self.needs_display = true;
    }

    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn set_bounds(&mut self, bounds: Rect) -> ChartResult<()> {
        bounds.validate_drawable()?;
        self.bounds = bounds;
        self.needs_display = true;
        Ok(())
    }

    /// Model angle in degrees: the target of any running animation.
    #[must_use]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Angle currently drawn, interpolated while an animation runs.
    #[must_use]
    pub fn presented_angle(&self) -> f64 {
        self.animation
            .as_ref()
            .map_or(self.angle, AngleAnimation::current_angle)
    }

    /// Sets the angle without animating; pauses any running animation first.
    pub fn set_angle(&mut self, angle: f64) {
        self.pause_animation();
        self.angle = angle;
        self.needs_display = true;
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Animates from `from` to `to`.
    ///
    /// A running animation is paused first. The model angle becomes `to`
    /// immediately; the drawn angle follows through `tick`. A non-positive
    /// effective duration completes synchronously.
    pub fn animate_from_angle(
        &mut self,
        from: f64,
        to: f64,
        timing: AnimationTiming,
        completion: Option<AnimationCompletion>,
    ) {
        self.pause_animation();

        let duration = timing.effective_duration(from, to);
        self.angle = to;
        self.needs_display = true;

        if !duration.is_finite() || duration <= 0.0 {
            debug!(from, to, "angle animation completed without interpolation");
            if let Some(completion) = completion {
                completion(true);
            }
            return;
        }

        debug!(from, to, duration, "start angle animation");
        self.animation = Some(AngleAnimation::new(from, to, duration, completion));
    }

    /// Animates from the current model angle to `to`.
    pub fn animate_to_angle(
        &mut self,
        to: f64,
        timing: AnimationTiming,
        completion: Option<AnimationCompletion>,
    ) {
        self.pause_animation();
        self.animate_from_angle(self.angle, to, timing, completion);
    }

    /// Freezes the drawn angle as the new model angle.
    pub fn pause_animation(&mut self) {
        let Some(animation) = self.animation.take() else {
            return;
        };
        self.angle = animation.current_angle();
        debug!(angle = self.angle, "pause angle animation");
        self.needs_display = true;
        animation.finish(false);
    }

    /// Cancels any running animation and resets the angle to zero.
    pub fn stop_animation(&mut self) {
        if let Some(animation) = self.animation.take() {
            debug!("stop angle animation");
            animation.finish(false);
        }
        self.angle = 0.0;
        self.needs_display = true;
    }

    /// Advances the running animation by `delta_seconds`.
    ///
    /// Returns `true` when the drawn angle changed and a redraw is due.
    pub fn tick(&mut self, delta_seconds: f64) -> bool {
        let Some(animation) = self.animation.as_mut() else {
            return false;
        };
        animation.step(delta_seconds);
        trace!(
            angle = animation.current_angle(),
            elapsed = animation.elapsed(),
            "tick angle animation"
        );
        self.needs_display = true;
        if animation.is_finished() {
            if let Some(animation) = self.animation.take() {
                debug!(angle = animation.to_angle(), "angle animation finished");
                animation.finish(true);
            }
        }
        true
    }

    #[must_use]
    pub fn needs_display(&self) -> bool {
        self.needs_display
    }

    #[must_use]
    pub fn frames_rendered(&self) -> usize {
        self.frames_rendered
    }

    /// Frame for the current drawn angle.
    pub fn build_frame(&self) -> ChartResult<RenderFrame> {
        build_progress_frame(
            self.presented_angle(),
            &self.config,
            self.bounds,
            self.text_formatter.as_ref(),
        )
    }

    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_frame()?;
        self.renderer.render(&frame)?;
        self.needs_display = false;
        self.frames_rendered += 1;
        Ok(())
    }

    /// Renders only when state changed since the last draw.
    pub fn render_if_needed(&mut self) -> ChartResult<bool> {
        if !self.needs_display {
            return Ok(false);
        }
        self.render()?;
        Ok(true)
    }

    /// Renders into an external cairo context, e.g. a GTK draw callback.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = self.build_frame()?;
        self.renderer.render_on_cairo_context(context, &frame)?;
        self.needs_display = false;
        self.frames_rendered += 1;
        Ok(())
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(mut self) -> R {
        self.pause_animation();
        self.renderer
    }
}
