use std::fmt::Write;

use crate::color::Color;
use crate::theme::FONT_FAMILY;

/// ARIA role carried through to the serialized element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Img,
    Presentation,
}

impl Role {
    fn as_str(&self) -> &'static str {
        match self {
            Role::Img => "img",
            Role::Presentation => "presentation",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

impl TextAnchor {
    fn as_str(&self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GroupNode {
    pub translate: Option<(f32, f32)>,
    pub fill: Option<Color>,
    pub role: Option<Role>,
    pub children: Vec<SceneNode>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RectNode {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub rx: f32,
    pub fill: Option<Color>,
    pub stroke: Option<(Color, f32)>,
    pub role: Option<Role>,
    pub aria_label: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CircleNode {
    pub cx: f32,
    pub cy: f32,
    pub r: f32,
    pub fill: Color,
    pub role: Option<Role>,
    pub aria_label: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PathNode {
    pub d: String,
    pub fill: Option<Color>,
    pub fill_opacity: Option<f32>,
    pub stroke: Option<Color>,
    pub stroke_width: Option<f32>,
    pub role: Option<Role>,
    pub aria_label: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LineNode {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    pub stroke: Color,
    pub stroke_width: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextNode {
    pub x: f32,
    pub y: f32,
    pub content: String,
    pub anchor: TextAnchor,
    pub size: f32,
    pub bold: bool,
    pub fill: Color,
    /// Degrees; the original uses `rotate(-90)` for the y-axis title.
    pub rotate: Option<f32>,
}

impl TextNode {
    pub fn new(x: f32, y: f32, content: impl Into<String>, size: f32) -> Self {
        Self {
            x,
            y,
            content: content.into(),
            anchor: TextAnchor::Start,
            size,
            bold: false,
            fill: Color::rgb(0, 0, 0),
            rotate: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SceneNode {
    Group(GroupNode),
    Rect(RectNode),
    Circle(CircleNode),
    Path(PathNode),
    Line(LineNode),
    Text(TextNode),
}

/// Root drawable surface. Rebuilt whole on every render; the declared size
/// and accessible name are always present, even with no children.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    pub aria_label: String,
    pub children: Vec<SceneNode>,
}

impl Scene {
    pub fn new(width: u32, height: u32, aria_label: impl Into<String>) -> Self {
        Self {
            width,
            height,
            aria_label: aria_label.into(),
            children: Vec::new(),
        }
    }

    pub fn push(&mut self, node: SceneNode) {
        self.children.push(node);
    }

    fn visit<'a>(nodes: &'a [SceneNode], f: &mut impl FnMut(&'a SceneNode)) {
        for node in nodes {
            f(node);
            if let SceneNode::Group(g) = node {
                Self::visit(&g.children, f);
            }
        }
    }

    pub fn rects(&self) -> Vec<&RectNode> {
        let mut out = Vec::new();
        Self::visit(&self.children, &mut |n| {
            if let SceneNode::Rect(r) = n {
                out.push(r);
            }
        });
        out
    }

    pub fn circles(&self) -> Vec<&CircleNode> {
        let mut out = Vec::new();
        Self::visit(&self.children, &mut |n| {
            if let SceneNode::Circle(c) = n {
                out.push(c);
            }
        });
        out
    }

    pub fn paths(&self) -> Vec<&PathNode> {
        let mut out = Vec::new();
        Self::visit(&self.children, &mut |n| {
            if let SceneNode::Path(p) = n {
                out.push(p);
            }
        });
        out
    }

    pub fn texts(&self) -> Vec<&TextNode> {
        let mut out = Vec::new();
        Self::visit(&self.children, &mut |n| {
            if let SceneNode::Text(t) = n {
                out.push(t);
            }
        });
        out
    }

    /// Count of drawn data shapes (rects, circles and paths marked as
    /// images), the figure the empty-data contract is stated in.
    pub fn shape_count(&self) -> usize {
        let mut count = 0;
        Self::visit(&self.children, &mut |n| {
            let role = match n {
                SceneNode::Rect(r) => r.role,
                SceneNode::Circle(c) => c.role,
                SceneNode::Path(p) => p.role,
                _ => None,
            };
            if role == Some(Role::Img) {
                count += 1;
            }
        });
        count
    }

    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        let _ = write!(
            out,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" role=\"img\" aria-label=\"{}\">",
            self.width,
            self.height,
            escape_xml(&self.aria_label)
        );
        for node in &self.children {
            write_node(&mut out, node);
        }
        out.push_str("</svg>");
        out
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

fn write_common(out: &mut String, role: Option<Role>, aria_label: &Option<String>) {
    if let Some(role) = role {
        let _ = write!(out, " role=\"{}\"", role.as_str());
    }
    if let Some(label) = aria_label {
        let _ = write!(out, " aria-label=\"{}\"", escape_xml(label));
    }
}

fn write_node(out: &mut String, node: &SceneNode) {
    match node {
        SceneNode::Group(g) => {
            out.push_str("<g");
            if let Some((tx, ty)) = g.translate {
                let _ = write!(out, " transform=\"translate({},{})\"", tx, ty);
            }
            if let Some(fill) = g.fill {
                let _ = write!(out, " fill=\"{}\"", fill.to_svg());
            }
            write_common(out, g.role, &None);
            out.push('>');
            for child in &g.children {
                write_node(out, child);
            }
            out.push_str("</g>");
        }
        SceneNode::Rect(r) => {
            let _ = write!(
                out,
                "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"",
                r.x, r.y, r.width, r.height
            );
            if r.rx > 0.0 {
                let _ = write!(out, " rx=\"{}\" ry=\"{}\"", r.rx, r.rx);
            }
            if let Some(fill) = r.fill {
                let _ = write!(out, " fill=\"{}\"", fill.to_svg());
            }
            if let Some((stroke, width)) = r.stroke {
                let _ = write!(
                    out,
                    " stroke=\"{}\" stroke-width=\"{}\"",
                    stroke.to_svg(),
                    width
                );
            }
            write_common(out, r.role, &r.aria_label);
            out.push_str("/>");
        }
        SceneNode::Circle(c) => {
            let _ = write!(
                out,
                "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\"",
                c.cx,
                c.cy,
                c.r,
                c.fill.to_svg()
            );
            write_common(out, c.role, &c.aria_label);
            out.push_str("/>");
        }
        SceneNode::Path(p) => {
            let _ = write!(out, "<path d=\"{}\"", p.d);
            match p.fill {
                Some(fill) => {
                    let _ = write!(out, " fill=\"{}\"", fill.to_svg());
                }
                None => out.push_str(" fill=\"none\""),
            }
            if let Some(op) = p.fill_opacity {
                let _ = write!(out, " fill-opacity=\"{}\"", op);
            }
            if let Some(stroke) = p.stroke {
                let _ = write!(out, " stroke=\"{}\"", stroke.to_svg());
            }
            if let Some(w) = p.stroke_width {
                let _ = write!(out, " stroke-width=\"{}\"", w);
            }
            write_common(out, p.role, &p.aria_label);
            out.push_str("/>");
        }
        SceneNode::Line(l) => {
            let _ = write!(
                out,
                "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>",
                l.x1,
                l.y1,
                l.x2,
                l.y2,
                l.stroke.to_svg(),
                l.stroke_width
            );
        }
        SceneNode::Text(t) => {
            let _ = write!(out, "<text x=\"{}\" y=\"{}\"", t.x, t.y);
            if t.anchor != TextAnchor::Start {
                let _ = write!(out, " text-anchor=\"{}\"", t.anchor.as_str());
            }
            let _ = write!(
                out,
                " font-size=\"{}px\" font-family=\"{}\"",
                t.size, FONT_FAMILY
            );
            if t.bold {
                out.push_str(" font-weight=\"bold\"");
            }
            let _ = write!(out, " fill=\"{}\"", t.fill.to_svg());
            if let Some(deg) = t.rotate {
                let _ = write!(out, " transform=\"rotate({})\"", deg);
            }
            let _ = write!(out, ">{}</text>", escape_xml(&t.content));
        }
    }
}
