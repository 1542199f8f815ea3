//! Finalized per-frame draw data produced by the GUI library.

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec4};

use crate::error::{BridgeError, Result};

/// Opaque texture reference carried through draw commands.
///
/// Zero means "no texture"; any other value is a binding handed out by the
/// renderer's texture bindings arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct TextureId(pub u64);

impl TextureId {
    /// The untextured id.
    pub const NONE: Self = Self(0);

    pub fn is_none(self) -> bool {
        self.0 == 0
    }
}

/// A single vertex, laid out like the GUI library's own vertex struct.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct DrawVert {
    pub pos: [f32; 2],
    pub uv: [f32; 2],
    /// Packed RGBA8: R in bits 0-7, G in 8-15, B in 16-23, A in 24-31.
    pub col: u32,
}

impl DrawVert {
    pub fn new(pos: Vec2, uv: Vec2, col: u32) -> Self {
        Self {
            pos: pos.to_array(),
            uv: uv.to_array(),
            col,
        }
    }

    /// Unpacks `col` into `[r, g, b, a]`.
    pub fn rgba(&self) -> [u8; 4] {
        self.col.to_le_bytes()
    }
}

/// One draw command: a clipped, textured range of a list's index buffer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DrawCmd {
    /// Clip rectangle `(x0, y0, x1, y1)` in display coordinates.
    pub clip_rect: Vec4,
    pub texture_id: TextureId,
    /// Added to every index of this command.
    pub vtx_offset: usize,
    /// First index of this command in the list's index buffer.
    pub idx_offset: usize,
    /// Number of indices; a multiple of 3 for real geometry.
    pub elem_count: usize,
}

/// An ordered command buffer sharing one vertex and one index buffer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DrawList {
    pub vtx_buffer: Vec<DrawVert>,
    pub idx_buffer: Vec<u16>,
    pub commands: Vec<DrawCmd>,
}

impl DrawList {
    /// Builds a list from the GUI library's raw vertex bytes.
    ///
    /// Validates that the bytes hold a whole number of [`DrawVert`]s and that
    /// every command's index range and every referenced vertex is in bounds.
    pub fn from_raw(vertex_bytes: &[u8], idx_buffer: Vec<u16>, commands: Vec<DrawCmd>) -> Result<Self> {
        let stride = std::mem::size_of::<DrawVert>();
        if vertex_bytes.len() % stride != 0 {
            return Err(BridgeError::VertexLayout(format!(
                "{} bytes is not a multiple of the {stride}-byte vertex size",
                vertex_bytes.len()
            )));
        }

        let vtx_buffer: Vec<DrawVert> = vertex_bytes
            .chunks_exact(stride)
            .map(bytemuck::pod_read_unaligned)
            .collect();

        let list = Self {
            vtx_buffer,
            idx_buffer,
            commands,
        };
        for cmd in &list.commands {
            list.check_command(cmd)?;
        }
        Ok(list)
    }

    /// Checks that `cmd`'s index range and every vertex it references lie
    /// inside this list's buffers.
    pub fn check_command(&self, cmd: &DrawCmd) -> Result<()> {
        let len = self.idx_buffer.len();
        let end = cmd
            .idx_offset
            .checked_add(cmd.elem_count)
            .filter(|&end| end <= len)
            .ok_or(BridgeError::IndexRange {
                offset: cmd.idx_offset,
                end: cmd.idx_offset.saturating_add(cmd.elem_count),
                len,
            })?;

        for &i in &self.idx_buffer[cmd.idx_offset..end] {
            match usize::from(i).checked_add(cmd.vtx_offset) {
                Some(v) if v < self.vtx_buffer.len() => {}
                _ => {
                    return Err(BridgeError::VertexLayout(format!(
                        "index {i} + offset {} out of range for {} vertices",
                        cmd.vtx_offset,
                        self.vtx_buffer.len()
                    )));
                }
            }
        }
        Ok(())
    }

    /// Vertex referenced by the `k`-th index of `cmd`.
    ///
    /// # Panics
    ///
    /// Panics if the command points outside this list's buffers; see
    /// [`DrawList::check_command`].
    pub fn vertex(&self, cmd: &DrawCmd, k: usize) -> &DrawVert {
        let index = usize::from(self.idx_buffer[cmd.idx_offset + k]) + cmd.vtx_offset;
        &self.vtx_buffer[index]
    }
}

/// Everything the GUI library produced for one frame.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DrawData {
    /// Top-left of the displayed area in display coordinates.
    pub display_pos: Vec2,
    pub display_size: Vec2,
    pub framebuffer_scale: Vec2,
    pub draw_lists: Vec<DrawList>,
}

impl DrawData {
    /// Total number of commands across all lists.
    pub fn command_count(&self) -> usize {
        self.draw_lists.iter().map(|l| l.commands.len()).sum()
    }
}
