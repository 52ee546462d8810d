//! Border decorator: a rectangle outline over an element's resolved bounds.

use quilt_core::{Color, DrawSurface, Rect, SurfaceError};

/// Draw a rectangle outline as four edge fills (top, bottom, left,
/// right), each `thickness` px thick and spanning the rect.
///
/// A non-positive thickness or a rect with non-positive width or height
/// is degenerate input and skips drawing entirely.
pub fn paint_border(
    surface: &mut dyn DrawSurface,
    rect: Rect,
    color: Color,
    thickness: f32,
) -> Result<(), SurfaceError> {
    if thickness <= 0.0 || rect.width <= 0.0 || rect.height <= 0.0 {
        return Ok(());
    }
    surface.fill_rect(Rect::new(rect.x, rect.y, rect.width, thickness), color)?;
    surface.fill_rect(
        Rect::new(rect.x, rect.bottom() - thickness, rect.width, thickness),
        color,
    )?;
    surface.fill_rect(Rect::new(rect.x, rect.y, thickness, rect.height), color)?;
    surface.fill_rect(
        Rect::new(rect.right() - thickness, rect.y, thickness, rect.height),
        color,
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use quilt_core::{DrawCommand, RecordingSurface};

    #[test]
    fn test_border_draws_four_edges() {
        let mut surface = RecordingSurface::new();
        paint_border(
            &mut surface,
            Rect::new(10.0, 10.0, 100.0, 50.0),
            Color::BLACK,
            2.0,
        )
        .unwrap();

        assert_eq!(surface.command_count(), 4);
        let edges: Vec<Rect> = surface
            .commands()
            .iter()
            .map(|command| match command {
                DrawCommand::FillRect { rect, .. } => *rect,
                other => panic!("unexpected command {other:?}"),
            })
            .collect();

        assert_eq!(edges[0], Rect::new(10.0, 10.0, 100.0, 2.0)); // top
        assert_eq!(edges[1], Rect::new(10.0, 58.0, 100.0, 2.0)); // bottom
        assert_eq!(edges[2], Rect::new(10.0, 10.0, 2.0, 50.0)); // left
        assert_eq!(edges[3], Rect::new(108.0, 10.0, 2.0, 50.0)); // right
    }

    #[test]
    fn test_border_skips_zero_thickness() {
        let mut surface = RecordingSurface::new();
        paint_border(
            &mut surface,
            Rect::new(0.0, 0.0, 100.0, 50.0),
            Color::BLACK,
            0.0,
        )
        .unwrap();
        assert!(surface.is_empty());
    }

    #[test]
    fn test_border_skips_degenerate_rect() {
        let mut surface = RecordingSurface::new();
        paint_border(
            &mut surface,
            Rect::new(0.0, 0.0, 0.0, 50.0),
            Color::BLACK,
            1.0,
        )
        .unwrap();
        assert!(surface.is_empty());
    }
}
