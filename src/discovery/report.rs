//! Fixed-width rendering of resolved discovery rows.
//!
//! Pure formatting: the orchestrator decides what to render and in which
//! order. Column widths are layout constants, not derived from the data;
//! oversized fields are written as-is rather than truncated or resized.

use serde::Serialize;
use std::io::{self, Write};
use uuid::Uuid;

pub const NAME_WIDTH: usize = 20;
pub const UUID_WIDTH: usize = 37;
pub const HOLDER_WIDTH: usize = 30;

/// One resolved line of the discovery report. A row always originates from
/// either the name registry (possibly with an absent identifier) or the
/// unregistered-identifier set (empty name).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstanceRow {
    pub name: String,
    pub id: Option<Uuid>,
    pub holder: Option<String>,
}

impl InstanceRow {
    pub fn named(name: impl Into<String>, id: Option<Uuid>, holder: Option<String>) -> Self {
        Self {
            name: name.into(),
            id,
            holder,
        }
    }

    pub fn unnamed(id: Uuid, holder: Option<String>) -> Self {
        Self {
            name: String::new(),
            id: Some(id),
            holder,
        }
    }
}

#[derive(Debug, Default)]
pub struct ReportRenderer;

impl ReportRenderer {
    pub fn write_header(out: &mut impl Write) -> io::Result<()> {
        writeln!(
            out,
            " {:<nw$}| {:<uw$}| {:<hw$}",
            "Instance Name",
            "Instance ID",
            "Manager",
            nw = NAME_WIDTH,
            uw = UUID_WIDTH,
            hw = HOLDER_WIDTH,
        )?;
        writeln!(
            out,
            "{:-<nw$}+{:-<uw$}+{:-<hw$}",
            "",
            "",
            "",
            nw = NAME_WIDTH + 1,
            uw = UUID_WIDTH + 1,
            hw = HOLDER_WIDTH + 1,
        )
    }

    pub fn write_row(out: &mut impl Write, row: &InstanceRow) -> io::Result<()> {
        let id = row.id.map(|id| id.to_string()).unwrap_or_default();
        writeln!(
            out,
            "{:>nw$} |{:>uw$} |{:>hw$}",
            format!("\"{}\"", row.name),
            id,
            row.holder.as_deref().unwrap_or(""),
            nw = NAME_WIDTH,
            uw = UUID_WIDTH,
            hw = HOLDER_WIDTH,
        )
    }
}
