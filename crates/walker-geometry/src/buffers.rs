//! Vertex, color and index buffers assembled from a position history

use crate::adjacency::{edge_indexes, ring_indexes};
use crate::error::GradientError;
use crate::gradient::ColorBuffer;
use crate::settings::RenderSettings;
use bytemuck::{Pod, Zeroable};
use std::time::Instant;
use walker_simulation::PositionHistory;

/// Vertex for GPU
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
}

/// Draw-ready geometry. Vertex `k * count + i` is walker `i` at iteration `k`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GeometryBuffers {
    pub vertices: Vec<Vertex>,
    pub rings_colors: ColorBuffer,
    pub edges_colors: ColorBuffer,
    pub rings_indexes: Vec<u32>,
    pub edges_indexes: Vec<u32>,
}

impl GeometryBuffers {
    /// Rebuilds every buffer from `history`.
    ///
    /// Only the rings gradient, edges color and ring closure of `settings`
    /// are read.
    pub fn assemble(
        history: &PositionHistory,
        settings: &RenderSettings,
    ) -> Result<Self, GradientError> {
        let started = Instant::now();
        let walkers = history.walkers();
        let iterations = history.iterations();

        let vertices: Vec<Vertex> = history
            .as_flat()
            .iter()
            .map(|p| Vertex {
                position: p.as_vec3().to_array(),
            })
            .collect();
        debug_assert!(vertices.len() <= u32::MAX as usize, "vertex count overflows u32 indexes");

        let rings_colors = settings.rings_gradient.sample(vertices.len())?;
        let edges_colors = ColorBuffer::solid(settings.edges_color, vertices.len());
        let rings_indexes = ring_indexes(walkers, iterations, settings.close_rings);
        let edges_indexes = edge_indexes(walkers, iterations);

        let buffers = Self {
            vertices,
            rings_colors,
            edges_colors,
            rings_indexes,
            edges_indexes,
        };
        log::debug!(
            "Assembled {} vertices, {} ring and {} edge indexes in {:.2?}",
            buffers.vertex_count(),
            buffers.rings_indexes.len(),
            buffers.edges_indexes.len(),
            started.elapsed()
        );
        Ok(buffers)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn rings_index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.rings_indexes)
    }

    pub fn edges_index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.edges_indexes)
    }

    /// Total size of every buffer, for upload budgeting
    pub fn byte_len(&self) -> usize {
        self.vertex_bytes().len()
            + self.rings_colors.as_bytes().len()
            + self.edges_colors.as_bytes().len()
            + self.rings_index_bytes().len()
            + self.edges_index_bytes().len()
    }
}
