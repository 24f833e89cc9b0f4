//! Summary reporter: final banner and next steps.

use std::io::Write;

use anyhow::Result;
use colored::Color;

use crate::console::Console;
use crate::core::components::MissingComponents;

const NEXT_STEPS: [&str; 3] = [
    "Write Level 1 specs in specs/*.md",
    "Generate Level 2 designs: Task(subagent_type=\"designer\", ...)",
    "Implement Level 3 code with traceability comments",
];

/// Print the success or partial-success banner followed by next steps.
pub fn print_summary<W: Write>(
    missing: &MissingComponents,
    doc_path: &str,
    console: &mut Console<W>,
) -> Result<()> {
    console.blank()?;
    console.rule()?;
    console.blank()?;

    if missing.is_empty() {
        console.banner(Color::Green, "🎉 CRC Modeling initialized successfully!")?;
    } else {
        console.banner(Color::Yellow, "⚠ CRC Modeling partially initialized")?;
        console.blank()?;
        console.line("Missing components:")?;
        for name in missing.names() {
            console.line(format_args!("  - {name}"))?;
        }
        console.blank()?;
        console.line(format_args!("See {doc_path} for setup instructions"))?;
    }

    console.blank()?;
    console.labeled("📚 Documentation:", doc_path)?;
    console.blank()?;
    console.labeled("🚀 Next steps:", "")?;
    for (index, step) in NEXT_STEPS.iter().enumerate() {
        console.line(format_args!("   {}. {step}", index + 1))?;
    }
    console.blank()?;
    console.rule()?;
    Ok(())
}
