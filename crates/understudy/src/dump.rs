use std::{collections::HashMap, io::Write};

use termcolor::{Buffer, Color, ColorSpec, WriteColor};

use crate::{NodeId, error::Result, stage::Stage};

/// Resolves view ids to display names for dumps.
pub trait ResourceNames {
    /// The resource name for `id`, if known.
    fn name_for_id(&self, id: i32) -> Option<String>;
}

impl ResourceNames for HashMap<i32, String> {
    fn name_for_id(&self, id: i32) -> Option<String> {
        self.get(&id).cloned()
    }
}

/// A resolver that knows no names. Ids are printed as numbers.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoNames;

impl ResourceNames for NoNames {
    fn name_for_id(&self, _id: i32) -> Option<String> {
        None
    }
}

/// Render the subtree at `root` as nested tags, without color. This is a
/// debug function.
pub fn dump(stage: &Stage, root: NodeId, names: &dyn ResourceNames) -> Result<String> {
    let mut buffer = Buffer::no_color();
    dump_to(stage, root, names, &mut buffer, 0)?;
    Ok(String::from_utf8_lossy(buffer.as_slice()).into_owned())
}

/// Write the subtree at `root` as nested tags, starting at `indent` spaces.
///
/// A node prints as `<ClassName id="name"/>`, with the id attribute only when
/// the id is positive. A node with children prints an open tag, its children
/// one level deeper, then a close tag.
pub fn dump_to(
    stage: &Stage,
    root: NodeId,
    names: &dyn ResourceNames,
    out: &mut dyn WriteColor,
    indent: usize,
) -> Result<()> {
    let node = stage.get(root)?;
    let pad = " ".repeat(indent);

    write!(out, "{pad}<")?;
    out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true))?;
    write!(out, "{}", node.class_name())?;
    out.reset()?;
    if node.id() > 0 {
        let name = names
            .name_for_id(node.id())
            .unwrap_or_else(|| node.id().to_string());
        write!(out, " id=\"{name}\"")?;
    }

    if node.children().is_empty() {
        writeln!(out, "/>")?;
        return Ok(());
    }
    writeln!(out, ">")?;
    for child in node.children() {
        dump_to(stage, *child, names, out, indent + stage.config().dump_indent)?;
    }
    writeln!(out, "{pad}</{}>", node.class_name())?;
    Ok(())
}
