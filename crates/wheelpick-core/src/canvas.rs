//! The paint target and a recorder for inspecting what was painted.

use crate::draw::{DrawCommand, TextStyle, Transform2D};
use crate::{Color, CornerRadius, Point, Rect};

/// Paint target handed to [`Widget::paint`](crate::Widget::paint).
///
/// Clips and transforms are scoped: every push is matched by a pop of the
/// same kind, innermost first.
pub trait Canvas {
    /// Fill `rect` with rounded corners.
    fn fill_rounded_rect(&mut self, rect: Rect, radius: CornerRadius, color: Color);

    /// Draw one line of text whose box starts at `position`.
    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle);

    /// Restrict drawing to `rect` until the matching [`Canvas::pop_clip`].
    fn push_clip(&mut self, rect: Rect);

    /// End the innermost clip.
    fn pop_clip(&mut self);

    /// Draw through `transform`, applied before any enclosing transform.
    fn push_transform(&mut self, transform: Transform2D);

    /// End the innermost transform.
    fn pop_transform(&mut self);
}

#[derive(Debug)]
enum Scope {
    Clip(Rect),
    Transform(Transform2D),
}

/// A text command with its enclosing clip and transforms resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    /// Label
    pub content: String,
    /// Top-left before transforming
    pub position: Point,
    /// Every enclosing transform, innermost applied first
    pub transform: Transform2D,
    /// Innermost enclosing clip
    pub clip: Option<Rect>,
}

/// [`Canvas`] that records a [`DrawCommand`] tree.
///
/// Each push opens a `Clip` or `Group` node that collects the commands up to
/// its pop. A pop that does not match the innermost open scope is dropped.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
    open: Vec<(Scope, Vec<DrawCommand>)>,
}

impl RecordingCanvas {
    /// Start an empty recording.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Closed top-level commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Scopes pushed but not yet popped.
    #[must_use]
    pub fn open_frames(&self) -> usize {
        self.open.len()
    }

    /// Text commands in paint order.
    #[must_use]
    pub fn text_runs(&self) -> Vec<TextRun> {
        let mut runs = Vec::new();
        walk(&self.commands, Transform2D::IDENTITY, None, &mut |command, transform, clip| {
            if let DrawCommand::Text {
                content, position, ..
            } = command
            {
                runs.push(TextRun {
                    content: content.clone(),
                    position: *position,
                    transform,
                    clip,
                });
            }
        });
        runs
    }

    /// Filled rectangles in paint order, untransformed.
    #[must_use]
    pub fn rects(&self) -> Vec<(Rect, CornerRadius, Color)> {
        let mut rects = Vec::new();
        walk(&self.commands, Transform2D::IDENTITY, None, &mut |command, _, _| {
            if let DrawCommand::Rect {
                bounds,
                radius,
                color,
            } = command
            {
                rects.push((*bounds, *radius, *color));
            }
        });
        rects
    }

    fn record(&mut self, command: DrawCommand) {
        match self.open.last_mut() {
            Some((_, children)) => children.push(command),
            None => self.commands.push(command),
        }
    }

    fn close(&mut self, clip: bool) {
        let top_is_clip = match self.open.last() {
            Some((Scope::Clip(_), _)) => true,
            Some((Scope::Transform(_), _)) => false,
            None => return,
        };
        if top_is_clip != clip {
            return;
        }
        let Some((scope, children)) = self.open.pop() else {
            return;
        };
        let node = match scope {
            Scope::Clip(bounds) => DrawCommand::Clip { bounds, children },
            Scope::Transform(transform) => DrawCommand::Group {
                children,
                transform,
            },
        };
        self.record(node);
    }
}

/// Visit every leaf command with the transform and clip in effect there.
fn walk(
    commands: &[DrawCommand],
    transform: Transform2D,
    clip: Option<Rect>,
    visit: &mut impl FnMut(&DrawCommand, Transform2D, Option<Rect>),
) {
    for command in commands {
        match command {
            DrawCommand::Group {
                children,
                transform: inner,
            } => walk(children, inner.then(&transform), clip, visit),
            DrawCommand::Clip { bounds, children } => {
                walk(children, transform, Some(*bounds), visit);
            }
            leaf => visit(leaf, transform, clip),
        }
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rounded_rect(&mut self, rect: Rect, radius: CornerRadius, color: Color) {
        self.record(DrawCommand::Rect {
            bounds: rect,
            radius,
            color,
        });
    }

    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle) {
        self.record(DrawCommand::Text {
            content: text.to_owned(),
            position,
            style: style.clone(),
        });
    }

    fn push_clip(&mut self, rect: Rect) {
        self.open.push((Scope::Clip(rect), Vec::new()));
    }

    fn pop_clip(&mut self) {
        self.close(true);
    }

    fn push_transform(&mut self, transform: Transform2D) {
        self.open.push((Scope::Transform(transform), Vec::new()));
    }

    fn pop_transform(&mut self) {
        self.close(false);
    }
}
