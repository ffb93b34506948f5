// CPU-side geometry: positions only, indexed triangles.
use glam::{Vec2, Vec3};

use super::glyphs::Block;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    pub positions: Vec<f32>,
    pub indices: Vec<u16>,
}

impl MeshData {
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    fn push_vertex(&mut self, v: Vec3) -> u16 {
        let idx = self.vertex_count() as u16;
        self.positions.extend_from_slice(&v.to_array());
        idx
    }

    /// Rectangle in the XZ plane centred on the origin, facing +Y.
    pub fn plane(size: Vec2) -> Self {
        let (hx, hz) = (size.x * 0.5, size.y * 0.5);
        let mut mesh = Self::default();
        let a = mesh.push_vertex(Vec3::new(-hx, 0.0, hz));
        let b = mesh.push_vertex(Vec3::new(hx, 0.0, hz));
        let c = mesh.push_vertex(Vec3::new(hx, 0.0, -hz));
        let d = mesh.push_vertex(Vec3::new(-hx, 0.0, -hz));
        mesh.indices.extend_from_slice(&[a, b, c, a, c, d]);
        mesh
    }

    /// Appends a closed box. Returns false if the index space is exhausted.
    pub fn push_box(&mut self, block: &Block) -> bool {
        if self.vertex_count() + 8 > u16::MAX as usize {
            return false;
        }
        let (lo, hi) = (block.min, block.max);
        let base = self.vertex_count() as u16;
        for i in 0..8u16 {
            let x = if i & 1 == 0 { lo.x } else { hi.x };
            let y = if i & 2 == 0 { lo.y } else { hi.y };
            let z = if i & 4 == 0 { lo.z } else { hi.z };
            self.push_vertex(Vec3::new(x, y, z));
        }
        // counter-clockwise seen from outside
        const FACES: [[u16; 4]; 6] = [
            [0, 2, 3, 1], // -z
            [4, 5, 7, 6], // +z
            [0, 4, 6, 2], // -x
            [1, 3, 7, 5], // +x
            [0, 1, 5, 4], // -y
            [2, 6, 7, 3], // +y
        ];
        for [a, b, c, d] in FACES {
            self.indices
                .extend_from_slice(&[base + a, base + b, base + c, base + a, base + c, base + d]);
        }
        true
    }

    pub fn from_blocks(blocks: &[Block]) -> Self {
        let mut mesh = Self::default();
        for block in blocks {
            if !mesh.push_box(block) {
                log::warn!("text mesh truncated at {} blocks", mesh.vertex_count() / 8);
                break;
            }
        }
        mesh
    }
}
