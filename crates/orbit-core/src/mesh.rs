//! UV sphere geometry for the planet meshes.

use bytemuck::{Pod, Zeroable};
use std::f32::consts::{PI, TAU};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
}

/// Unit sphere with `segments` slices around Y and `segments` stacks pole to
/// pole. The seam column is duplicated so UVs wrap cleanly.
pub fn uv_sphere(segments: u32) -> Mesh {
    let slices = segments.max(3);
    let stacks = segments.max(2);
    let mut vertices = Vec::with_capacity(((slices + 1) * (stacks + 1)) as usize);
    for stack in 0..=stacks {
        let v = stack as f32 / stacks as f32;
        let theta = v * PI;
        for slice in 0..=slices {
            let u = slice as f32 / slices as f32;
            let phi = u * TAU;
            let n = [
                -phi.cos() * theta.sin(),
                theta.cos(),
                phi.sin() * theta.sin(),
            ];
            vertices.push(MeshVertex {
                position: n,
                normal: n,
                uv: [u, v],
            });
        }
    }

    let row = slices + 1;
    let mut indices = Vec::with_capacity((slices * stacks * 6) as usize);
    for stack in 0..stacks {
        for slice in 0..slices {
            let a = stack * row + slice;
            let b = a + row;
            let c = b + 1;
            let d = a + 1;
            // skip the degenerate triangle at each pole
            if stack != 0 {
                indices.extend_from_slice(&[a, b, d]);
            }
            if stack != stacks - 1 {
                indices.extend_from_slice(&[b, c, d]);
            }
        }
    }
    Mesh { vertices, indices }
}
