//! Draw replay: feeds finalized GUI draw data to the host's immediate-mode rasterizer.
//!
//! Every command gets its own scissor rectangle, texture binding and batch
//! flush. Texture and scissor changes are always applied to a flushed batch,
//! at the cost of one flush per command. Commands reaching outside their
//! list's buffers are skipped.

use glam::{Vec2, Vec4};
use rlimgui_core::{DrawCmd, DrawData, DrawList, DrawVert, Rasterizer, ScissorRect};

use crate::texture::TextureBindings;

/// Counters from one replay, mostly for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReplayStats {
    /// Commands visited, including empty ones.
    pub commands: usize,
    pub triangles: usize,
    /// Triangle batches begun, including restarts after a full batch.
    pub batches: usize,
}

/// Converts a clip rectangle to a framebuffer scissor rectangle.
///
/// The clip rectangle `(x0, y0, x1, y1)` is taken relative to `display_pos`,
/// flipped to the host's bottom-left origin using the display height and
/// scaled per axis by the framebuffer scale.
#[allow(clippy::cast_possible_truncation)]
pub fn scissor_rect(
    clip_rect: Vec4,
    display_pos: Vec2,
    display_size: Vec2,
    framebuffer_scale: Vec2,
) -> ScissorRect {
    let x = clip_rect.x - display_pos.x;
    let y = clip_rect.y - display_pos.y;
    let width = (clip_rect.z - display_pos.x) - x;
    let height = (clip_rect.w - display_pos.y) - y;

    ScissorRect {
        x: (x * framebuffer_scale.x) as i32,
        y: ((display_size.y - (y + height).trunc()) * framebuffer_scale.y) as i32,
        width: (width * framebuffer_scale.x) as i32,
        height: (height * framebuffer_scale.y) as i32,
    }
}

/// Replays all draw lists of a frame.
///
/// Backface culling is disabled for the duration (GUI geometry is not
/// consistently wound). On return the texture is unbound, the scissor test
/// is off and culling is back on, which is the state the host's own drawing
/// expects.
pub fn render_draw_data<R: Rasterizer + ?Sized>(
    rl: &mut R,
    data: &DrawData,
    bindings: &TextureBindings,
) -> ReplayStats {
    let mut stats = ReplayStats::default();

    rl.draw_render_batch_active();
    rl.disable_backface_culling();

    for list in &data.draw_lists {
        for cmd in &list.commands {
            stats.commands += 1;
            render_command(rl, data, list, cmd, bindings, &mut stats);
        }
    }

    rl.set_texture(0);
    rl.disable_scissor_test();
    rl.enable_backface_culling();

    log::trace!(
        "replayed {} commands, {} triangles in {} batches",
        stats.commands,
        stats.triangles,
        stats.batches
    );
    stats
}

fn render_command<R: Rasterizer + ?Sized>(
    rl: &mut R,
    data: &DrawData,
    list: &DrawList,
    cmd: &DrawCmd,
    bindings: &TextureBindings,
    stats: &mut ReplayStats,
) {
    rl.enable_scissor_test();
    rl.scissor(scissor_rect(
        cmd.clip_rect,
        data.display_pos,
        data.display_size,
        data.framebuffer_scale,
    ));

    if cmd.elem_count < 3 {
        rl.draw_render_batch_active();
        return;
    }

    if let Err(err) = list.check_command(cmd) {
        log::debug!("skipping draw command: {err}");
        rl.draw_render_batch_active();
        return;
    }

    let texture = bindings.backend_id(cmd.texture_id);
    rl.begin_triangles();
    rl.set_texture(texture);
    stats.batches += 1;

    for k in (0..=cmd.elem_count - 3).step_by(3) {
        // A triangle never straddles two batches.
        if rl.check_render_batch_limit(3) {
            rl.end();
            rl.begin_triangles();
            rl.set_texture(texture);
            stats.batches += 1;
        }

        emit_vertex(rl, list.vertex(cmd, k));
        emit_vertex(rl, list.vertex(cmd, k + 1));
        emit_vertex(rl, list.vertex(cmd, k + 2));
        stats.triangles += 1;
    }

    rl.end();
    rl.draw_render_batch_active();
}

fn emit_vertex<R: Rasterizer + ?Sized>(rl: &mut R, vertex: &DrawVert) {
    let [r, g, b, a] = vertex.rgba();
    rl.color4ub(r, g, b, a);
    rl.tex_coord2f(vertex.uv[0], vertex.uv[1]);
    rl.vertex2f(vertex.pos[0], vertex.pos[1]);
}
