use std::io::{self, Write};

pub fn usage_line(program: &str) -> String {
    format!("Usage: {} <your_new_password>", program)
}

pub fn write_report<W: Write>(out: &mut W, label: &str, hash: &str) -> io::Result<()> {
    writeln!(out, "{}", label)?;
    writeln!(out, "{}", hash)?;
    out.flush()
}
