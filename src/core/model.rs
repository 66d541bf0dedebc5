// Hero model geometry: a GLB flattened into one indexed triangle list.

use glam::{Mat3, Mat4, Vec3};

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("failed to parse glTF: {0}")]
    Gltf(#[from] gltf::Error),
    #[error("mesh primitive has no positions")]
    MissingPositions,
    #[error("model contains no triangles")]
    Empty,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ModelVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 4],
}

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl Bounds {
    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let (min, max) = iter.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p)));
        Some(Self { min, max })
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }
}

pub struct HeroModel {
    pub vertices: Vec<ModelVertex>,
    pub indices: Vec<u32>,
}

impl HeroModel {
    /// Parse a binary glTF with embedded buffers, baking node transforms.
    pub fn from_glb(bytes: &[u8]) -> Result<Self, ModelError> {
        let (document, buffers, _images) = gltf::import_slice(bytes)?;
        let mut model = HeroModel {
            vertices: Vec::new(),
            indices: Vec::new(),
        };
        let scene = document
            .default_scene()
            .or_else(|| document.scenes().next());
        if let Some(scene) = scene {
            for node in scene.nodes() {
                model.append_node(&node, &buffers, Mat4::IDENTITY)?;
            }
        }
        if model.indices.is_empty() {
            return Err(ModelError::Empty);
        }
        Ok(model)
    }

    fn append_node(
        &mut self,
        node: &gltf::Node,
        buffers: &[gltf::buffer::Data],
        parent: Mat4,
    ) -> Result<(), ModelError> {
        let transform = parent * Mat4::from_cols_array_2d(&node.transform().matrix());
        if let Some(mesh) = node.mesh() {
            for primitive in mesh.primitives() {
                if primitive.mode() != gltf::mesh::Mode::Triangles {
                    continue;
                }
                self.append_primitive(&primitive, buffers, transform)?;
            }
        }
        for child in node.children() {
            self.append_node(&child, buffers, transform)?;
        }
        Ok(())
    }

    fn append_primitive(
        &mut self,
        primitive: &gltf::Primitive,
        buffers: &[gltf::buffer::Data],
        transform: Mat4,
    ) -> Result<(), ModelError> {
        let reader = primitive.reader(|buffer| buffers.get(buffer.index()).map(|d| &d.0[..]));
        let positions: Vec<Vec3> = reader
            .read_positions()
            .ok_or(ModelError::MissingPositions)?
            .map(|p| transform.transform_point3(Vec3::from_array(p)))
            .collect();
        if positions.is_empty() {
            return Ok(());
        }
        let base = self.vertices.len() as u32;
        let indices: Vec<u32> = match reader.read_indices() {
            Some(ix) => ix.into_u32().collect(),
            None => (0..positions.len() as u32).collect(),
        };
        let normals: Vec<Vec3> = match reader.read_normals() {
            Some(ns) => {
                let normal_matrix = Mat3::from_mat4(transform).inverse().transpose();
                ns.map(|n| (normal_matrix * Vec3::from_array(n)).normalize_or_zero())
                    .collect()
            }
            None => compute_normals(&positions, &indices),
        };
        let factor = primitive
            .material()
            .pbr_metallic_roughness()
            .base_color_factor();
        let colors: Option<Vec<[f32; 4]>> = reader.read_colors(0).map(|c| c.into_rgba_f32().collect());

        for (i, p) in positions.iter().enumerate() {
            let vc = colors
                .as_ref()
                .and_then(|c| c.get(i).copied())
                .unwrap_or([1.0; 4]);
            self.vertices.push(ModelVertex {
                position: p.to_array(),
                normal: normals.get(i).copied().unwrap_or(Vec3::Y).to_array(),
                color: [
                    factor[0] * vc[0],
                    factor[1] * vc[1],
                    factor[2] * vc[2],
                    factor[3] * vc[3],
                ],
            });
        }
        let count = positions.len() as u32;
        for tri in indices.chunks_exact(3) {
            if tri.iter().all(|&i| i < count) {
                self.indices.extend(tri.iter().map(|&i| base + i));
            }
        }
        Ok(())
    }

    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_points(self.vertices.iter().map(|v| Vec3::from_array(v.position)))
    }

    /// Translate the geometry so its bounding-box center sits at the origin.
    pub fn recenter(&mut self) -> Vec3 {
        let Some(center) = self.bounds().map(|b| b.center()) else {
            return Vec3::ZERO;
        };
        for v in &mut self.vertices {
            v.position = (Vec3::from_array(v.position) - center).to_array();
        }
        center
    }
}

/// Area-weighted vertex normals for an indexed triangle list.
pub fn compute_normals(positions: &[Vec3], indices: &[u32]) -> Vec<Vec3> {
    let mut normals = vec![Vec3::ZERO; positions.len()];
    for tri in indices.chunks_exact(3) {
        let [a, b, c] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
        if a >= positions.len() || b >= positions.len() || c >= positions.len() {
            continue;
        }
        let face = (positions[b] - positions[a]).cross(positions[c] - positions[a]);
        normals[a] += face;
        normals[b] += face;
        normals[c] += face;
    }
    normals
        .into_iter()
        .map(|n| {
            let n = n.normalize_or_zero();
            if n == Vec3::ZERO {
                Vec3::Y
            } else {
                n
            }
        })
        .collect()
}
