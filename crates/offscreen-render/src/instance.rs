//! GPU-ready packing of overlay draw commands.

use glam::{Affine2, Vec4};
use offscreen_core::{DrawCommand, DrawKind, Rect, TextureId};

/// One overlay quad as laid out in an instance buffer.
///
/// A vertex shader reconstructs a corner as
/// `transform * (rect_min + corner * rect_size)`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct OverlayInstance {
    /// Top-left corner of the quad in its local space.
    pub rect_min: [f32; 2],
    /// Width and height of the quad.
    pub rect_size: [f32; 2],
    /// First column of the 2x2 part of the transform.
    pub transform_x: [f32; 2],
    /// Second column of the 2x2 part of the transform.
    pub transform_y: [f32; 2],
    /// Translation of the transform.
    pub translation: [f32; 2],
    /// Host texture id.
    pub texture: u32,
    /// 0 for icons, 1 for arrows.
    pub kind: u32,
    /// RGBA tint, white when the command has none.
    pub tint: [f32; 4],
}

impl OverlayInstance {
    /// Rebuilds the draw command this instance was packed from.
    #[must_use]
    pub fn to_command(&self) -> DrawCommand {
        let kind = if self.kind == 1 {
            DrawKind::Arrow
        } else {
            DrawKind::Icon
        };
        let transform = Affine2::from_cols(
            self.transform_x.into(),
            self.transform_y.into(),
            self.translation.into(),
        );
        DrawCommand {
            kind,
            rect: Rect::new(self.rect_min.into(), self.rect_size.into()),
            texture: TextureId(self.texture),
            transform: (transform != Affine2::IDENTITY).then_some(transform),
            tint: (kind == DrawKind::Arrow).then(|| Vec4::from(self.tint)),
        }
    }
}

impl From<&DrawCommand> for OverlayInstance {
    fn from(cmd: &DrawCommand) -> Self {
        let transform = cmd.transform.unwrap_or(Affine2::IDENTITY);
        Self {
            rect_min: cmd.rect.min.to_array(),
            rect_size: cmd.rect.size.to_array(),
            transform_x: transform.matrix2.x_axis.to_array(),
            transform_y: transform.matrix2.y_axis.to_array(),
            translation: transform.translation.to_array(),
            texture: cmd.texture.0,
            kind: match cmd.kind {
                DrawKind::Icon => 0,
                DrawKind::Arrow => 1,
            },
            tint: cmd.tint.unwrap_or(Vec4::ONE).to_array(),
        }
    }
}

/// Packs a frame's commands, preserving their order.
#[must_use]
pub fn pack_instances(commands: &[DrawCommand]) -> Vec<OverlayInstance> {
    commands.iter().map(OverlayInstance::from).collect()
}

/// Views packed instances as raw bytes for upload.
#[must_use]
pub fn instance_bytes(instances: &[OverlayInstance]) -> &[u8] {
    bytemuck::cast_slice(instances)
}
