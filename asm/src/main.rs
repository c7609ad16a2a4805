use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::exit;

use color_print::cprintln;

use sap8asm::codegen;
use sap8asm::collect::collect;
use sap8asm::error::Error;
use sap8asm::output::Format;
use sap8asm::parser::Inst;
use sap8asm::symbols::Symbols;

const HELP_TEMPLATE: &str = "\
{before-help}{bin} {version}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

#[derive(Debug, clap::Parser)]
#[clap(version, about, help_template = HELP_TEMPLATE)]
struct Args {
    /// Input file
    input: String,

    /// Output file, defaults to the input path with the format's extension
    #[clap(short, long)]
    output: Option<String>,

    /// Output format, inferred from a `.h` output path when omitted
    #[clap(short, long, value_enum)]
    format: Option<Format>,

    /// Dump the symbol table and assembled listing
    #[clap(short, long)]
    dump: bool,
}

fn main() {
    use clap::Parser;

    let args = Args::parse();
    println!("SAP8 Assembler");

    let format = match args.format {
        Some(format) => format,
        None => match args.output.as_deref().map(Path::new).and_then(Path::extension) {
            Some(ext) if ext == "h" => Format::Header,
            _ => Format::Binary,
        },
    };
    let output = match &args.output {
        Some(path) => PathBuf::from(path),
        None => Path::new(&args.input).with_extension(format.extension()),
    };

    if output.exists() && !confirm_overwrite(&output) {
        exit(1);
    }

    println!("  < {}", args.input);
    let source = match std::fs::read_to_string(&args.input) {
        Ok(source) => source,
        Err(err) => {
            report(&Error::FileOpen(args.input.clone(), err));
            exit(1);
        }
    };

    let (symbols, insts) = match collect(&source) {
        Ok(collected) => collected,
        Err(err) => {
            err.diag(&args.input);
            exit(1);
        }
    };
    let code = match codegen::generate(&symbols, &insts) {
        Ok(code) => code,
        Err(err) => {
            err.diag(&args.input);
            exit(1);
        }
    };

    if args.dump {
        dump(&symbols, &insts);
    }

    if let Err(err) = std::fs::write(&output, format.encode(&code)) {
        report(&Error::FileWrite(output.display().to_string(), err));
        exit(1);
    }
    println!("  > {} ({} bytes)", output.display(), code.len());
}

fn report(err: &Error) {
    cprintln!("<red,bold>error</>: {}", err);
}

/// Ask before clobbering an existing output file. Loops until the answer
/// starts with `y` or `n`.
fn confirm_overwrite(path: &Path) -> bool {
    loop {
        print!(
            "File {} already exists, do you wish to continue? [Y/n]: ",
            path.display()
        );
        let _ = std::io::stdout().flush();
        let mut answer = String::new();
        match std::io::stdin().read_line(&mut answer) {
            Ok(0) | Err(_) => return false,
            Ok(_) => {}
        }
        match answer.trim().chars().next().map(|c| c.to_ascii_lowercase()) {
            Some('y') => return true,
            Some('n') => return false,
            _ => {}
        }
    }
}

/// Print the symbol table and a listing of each instruction with its
/// address and emitted bytes.
fn dump(symbols: &Symbols, insts: &[Inst]) {
    if !symbols.is_empty() {
        println!("Symbols:");
        for (name, addr) in symbols.iter() {
            cprintln!("  <green>{}</> = 0x{:04X}", name, addr);
        }
    }
    println!("Listing:");
    let mut addr: u16 = 0;
    for inst in insts {
        // Both passes succeeded, so every instruction encodes cleanly.
        if let Ok(bytes) = codegen::encode(inst, symbols) {
            let hex = bytes
                .iter()
                .map(|byte| format!("{:02X}", byte))
                .collect::<Vec<_>>()
                .join(" ");
            cprintln!(
                "  <green>{:04X}</> | {:<8} | <red>{}</> <blue>{}</>",
                addr,
                hex,
                inst.op,
                inst.operand
            );
            addr += inst.op.size();
        }
    }
}
