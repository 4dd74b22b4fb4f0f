//! Parameter and read surface for a UI and a renderer
//!
//! Simulation mutators recompute synchronously. Geometry is rebuilt lazily:
//! mutations only raise `needs_geometry_update`, and the render loop calls
//! [`Session::refresh_geometry`] once per frame before drawing.

use crate::error::SessionError;
use glam::Vec3;
use walker_geometry::{
    Color, GeometryBuffers, Gradient, GradientError, LineUniform, RenderSettings, ViewTransform,
};
use walker_physics::{InteractionLaw, RelationModel};
use walker_simulation::{ClockSeeds, ParamError, SeedProvider, SimulationParameters, WalkerSystem};

pub struct Session {
    system: WalkerSystem,
    settings: RenderSettings,
    view: ViewTransform,
    buffers: GeometryBuffers,
    needs_geometry_update: bool,
}

impl Session {
    pub fn new(params: SimulationParameters) -> Result<Self, SessionError> {
        Self::with_seed_provider(params, ClockSeeds::default())
    }

    pub fn with_seed_provider(
        params: SimulationParameters,
        provider: impl SeedProvider + 'static,
    ) -> Result<Self, SessionError> {
        Ok(Self {
            system: WalkerSystem::with_seed_provider(params, provider)?,
            settings: RenderSettings::default(),
            view: ViewTransform::new(1, 1),
            buffers: GeometryBuffers::default(),
            needs_geometry_update: true,
        })
    }

    pub fn system(&self) -> &WalkerSystem {
        &self.system
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    pub fn view(&self) -> &ViewTransform {
        &self.view
    }

    /// Buffers from the last [`Session::refresh_geometry`]
    pub fn buffers(&self) -> &GeometryBuffers {
        &self.buffers
    }

    pub fn needs_geometry_update(&self) -> bool {
        self.needs_geometry_update
    }

    pub fn request_geometry_update(&mut self) {
        self.needs_geometry_update = true;
    }

    /// Rebuilds the buffers if an update is pending.
    ///
    /// Returns `true` if the buffers were rebuilt.
    pub fn refresh_geometry(&mut self) -> Result<bool, SessionError> {
        if !self.needs_geometry_update {
            return Ok(false);
        }
        self.buffers = GeometryBuffers::assemble(self.system.positions(), &self.settings)?;
        self.needs_geometry_update = false;
        Ok(true)
    }

    // Simulation

    fn simulate(
        &mut self,
        mutate: impl FnOnce(&mut WalkerSystem) -> Result<(), ParamError>,
    ) -> Result<(), SessionError> {
        mutate(&mut self.system)?;
        self.needs_geometry_update = true;
        Ok(())
    }

    pub fn set_params(&mut self, params: SimulationParameters) -> Result<(), SessionError> {
        self.simulate(|s| s.set_params(params))
    }

    pub fn set_count(&mut self, count: usize) -> Result<(), SessionError> {
        self.simulate(|s| s.set_count(count))
    }

    pub fn set_spread(&mut self, spread: f64) -> Result<(), SessionError> {
        self.simulate(|s| s.set_spread(spread))
    }

    pub fn set_interaction_law(&mut self, law: InteractionLaw) -> Result<(), SessionError> {
        self.simulate(|s| s.set_interaction_law(law))
    }

    pub fn set_relation_model(&mut self, model: RelationModel) -> Result<(), SessionError> {
        self.simulate(|s| s.set_relation_model(model))
    }

    pub fn set_relation_avg(&mut self, avg: f64) -> Result<(), SessionError> {
        self.simulate(|s| s.set_relation_avg(avg))
    }

    pub fn set_relation_variance(&mut self, variance: f64) -> Result<(), SessionError> {
        self.simulate(|s| s.set_relation_variance(variance))
    }

    pub fn set_iterations(&mut self, iterations: usize) -> Result<(), SessionError> {
        self.simulate(|s| s.set_iterations(iterations))
    }

    pub fn reseed_start_positions(&mut self) {
        self.system.reseed_start_positions();
        self.needs_geometry_update = true;
    }

    pub fn reseed_relation_mask(&mut self) {
        self.system.reseed_relation_mask();
        self.needs_geometry_update = true;
    }

    pub fn reseed_relation_matrix(&mut self) {
        self.system.reseed_relation_matrix();
        self.needs_geometry_update = true;
    }

    // Display

    /// Replaces the render settings. Only changes to buffer inputs request
    /// a geometry update.
    pub fn set_render_settings(&mut self, settings: RenderSettings) -> Result<(), SessionError> {
        if settings.rings_gradient.is_empty() {
            log::warn!("Rejected empty rings gradient");
            return Err(GradientError::Empty.into());
        }
        self.display(|s| *s = settings);
        Ok(())
    }

    fn display(&mut self, edit: impl FnOnce(&mut RenderSettings)) {
        let mut settings = self.settings.clone();
        edit(&mut settings);
        if self.settings.changes_geometry(&settings) {
            self.needs_geometry_update = true;
        }
        self.settings = settings;
    }

    /// Takes a snapshot of `gradient`; later edits to the caller's copy do
    /// not reach the session.
    pub fn set_rings_gradient(&mut self, gradient: &Gradient) -> Result<(), SessionError> {
        self.set_render_settings(RenderSettings {
            rings_gradient: gradient.clone(),
            ..self.settings.clone()
        })
    }

    pub fn set_edges_color(&mut self, color: Color) {
        self.display(|s| s.edges_color = color);
    }

    pub fn set_close_rings(&mut self, close: bool) {
        self.display(|s| s.close_rings = close);
    }

    pub fn set_show_rings(&mut self, show: bool) {
        self.display(|s| s.show_rings = show);
    }

    pub fn set_show_edges(&mut self, show: bool) {
        self.display(|s| s.show_edges = show);
    }

    pub fn set_rings_width(&mut self, width: f32) {
        self.display(|s| s.rings_width = width);
    }

    pub fn set_edges_width(&mut self, width: f32) {
        self.display(|s| s.edges_width = width);
    }

    pub fn set_rings_opacity(&mut self, opacity: f32) {
        self.display(|s| s.rings_opacity = opacity.clamp(0.0, 1.0));
    }

    pub fn set_edges_opacity(&mut self, opacity: f32) {
        self.display(|s| s.edges_opacity = opacity.clamp(0.0, 1.0));
    }

    pub fn set_background_color(&mut self, color: Color) {
        self.display(|s| s.background_color = color);
    }

    // View

    /// Degrees per second around each axis
    pub fn set_rotation_speed(&mut self, speed: Vec3) {
        self.view.rotation_speed = speed;
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.view.resize(width, height);
    }

    /// Advances the view by one frame of `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.view.advance(dt);
    }

    /// Uniform for drawing rings, `None` while rings are hidden
    pub fn rings_uniform(&self, viewport: (u32, u32)) -> Option<LineUniform> {
        self.settings.show_rings.then(|| {
            self.view
                .to_uniform(viewport, self.settings.rings_width, self.settings.rings_opacity)
        })
    }

    /// Uniform for drawing edges, `None` while edges are hidden
    pub fn edges_uniform(&self, viewport: (u32, u32)) -> Option<LineUniform> {
        self.settings.show_edges.then(|| {
            self.view
                .to_uniform(viewport, self.settings.edges_width, self.settings.edges_opacity)
        })
    }
}
