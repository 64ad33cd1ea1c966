use tracing::{debug, info_span};

use crate::curve::{CurveHost, OutlineCurve};
use crate::error::{OutlineError, Result};
use crate::outline::{ComputeOutline, Outline, OutlineParams};
use crate::projection::{EyeSource, VertexSource, WorldToScreen};

/// End-to-end silhouette pipeline over host capabilities.
///
/// Reads the mesh and the eye once per call, computes the outline and hands
/// the resulting curve to a [`CurveHost`].
pub struct ConvexOutliner<'a> {
    mesh: &'a dyn VertexSource,
    eye: &'a dyn EyeSource,
    projector: &'a dyn WorldToScreen,
    params: OutlineParams,
}

impl<'a> ConvexOutliner<'a> {
    /// Starts building an outliner.
    #[must_use]
    pub fn builder() -> ConvexOutlinerBuilder<'a> {
        ConvexOutlinerBuilder::default()
    }

    /// Returns the outline parameters.
    #[must_use]
    pub fn params(&self) -> &OutlineParams {
        &self.params
    }

    /// Computes the outline of the current mesh from the current eye.
    ///
    /// # Errors
    ///
    /// Returns any error from the capabilities or from [`ComputeOutline::execute`].
    pub fn outline(&self) -> Result<Outline> {
        let _span = info_span!("outline").entered();
        let vertices = self.mesh.vertices()?;
        let eye = self.eye.eye_point()?;
        debug!(vertices = vertices.len(), ?eye, "read mesh and camera");
        ComputeOutline::new(eye, self.params).execute(&vertices, self.projector)
    }

    /// Computes the outline and asks `host` to create a degree-1 curve
    /// through it, closed when `params.close_curve` is set.
    ///
    /// # Errors
    ///
    /// Returns any error from [`Self::outline`], curve assembly or the host.
    pub fn build_curve<H: CurveHost>(&self, host: &mut H) -> Result<H::Handle> {
        let outline = self.outline()?;
        let curve = OutlineCurve::from_outline(&outline.points, self.params.close_curve)?;
        host.create_curve(&curve)
    }
}

/// Builder for [`ConvexOutliner`].
#[derive(Default)]
pub struct ConvexOutlinerBuilder<'a> {
    mesh: Option<&'a dyn VertexSource>,
    eye: Option<&'a dyn EyeSource>,
    projector: Option<&'a dyn WorldToScreen>,
    params: OutlineParams,
}

impl<'a> ConvexOutlinerBuilder<'a> {
    /// Sets the mesh vertex source.
    #[must_use]
    pub fn mesh(mut self, mesh: &'a dyn VertexSource) -> Self {
        self.mesh = Some(mesh);
        self
    }

    /// Sets the eye point source.
    #[must_use]
    pub fn eye(mut self, eye: &'a dyn EyeSource) -> Self {
        self.eye = Some(eye);
        self
    }

    /// Sets the world-to-screen projector.
    #[must_use]
    pub fn projector(mut self, projector: &'a dyn WorldToScreen) -> Self {
        self.projector = Some(projector);
        self
    }

    /// Sets the outline parameters.
    #[must_use]
    pub fn params(mut self, params: OutlineParams) -> Self {
        self.params = params;
        self
    }

    /// Finishes the builder.
    ///
    /// # Errors
    ///
    /// Returns `OutlineError::MissingInput` naming the first capability not set.
    pub fn build(self) -> Result<ConvexOutliner<'a>> {
        let mesh = self
            .mesh
            .ok_or_else(|| OutlineError::MissingInput("no mesh set".into()))?;
        let eye = self
            .eye
            .ok_or_else(|| OutlineError::MissingInput("no eye point set".into()))?;
        let projector = self
            .projector
            .ok_or_else(|| OutlineError::MissingInput("no projector set".into()))?;
        Ok(ConvexOutliner {
            mesh,
            eye,
            projector,
            params: self.params,
        })
    }
}
