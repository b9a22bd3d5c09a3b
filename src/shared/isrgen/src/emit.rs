use crate::vectors::{stub_shape, stub_symbol, vectors};
use std::io::{Result, Write};

pub const GENERATOR_NAME: &str = "isrgen";

/// Calling convention of the hand-written stubs in `isrs.asm`.
const STUB_CALLING_CONVENTION: &str = "__attribute__((cdecl))";
const GATE_SEGMENT: &str = "GDT_CODE_SEGMENT";
const GATE_FLAGS: &str = "IDT_FLAG_RING_0 | IDT_FLAG_GATE_32_BIT_INT";

/// Writes the C translation unit declaring every stub and installing each into its IDT gate.
pub fn render_source(out: &mut impl Write) -> Result<()> {
    writeln!(out, "//*  Auto Generated by {GENERATOR_NAME}  *//")?;
    writeln!(out, "#include \"idt.h\"")?;
    writeln!(out, "#include \"gdt.h\"")?;
    writeln!(out)?;

    for vector in vectors() {
        writeln!(out, "void {STUB_CALLING_CONVENTION} {}();", stub_symbol(vector))?;
    }

    writeln!(out)?;
    writeln!(out, "void isr_initialize_gates() {{")?;
    for vector in vectors() {
        writeln!(out, "    idt_set_gate({vector}, {}, {GATE_SEGMENT}, {GATE_FLAGS});", stub_symbol(vector))?;
    }
    writeln!(out, "}}")?;

    Ok(())
}

/// Writes one stub macro directive per vector, for inclusion by the assembler.
pub fn render_include(out: &mut impl Write) -> Result<()> {
    writeln!(out, ";*  Auto Generated by {GENERATOR_NAME}  *;")?;
    writeln!(out)?;

    for vector in vectors() {
        writeln!(out, "{} {vector}", stub_shape(vector))?;
    }

    Ok(())
}
