use std::convert::TryFrom;
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use color_eyre::eyre::{eyre, WrapErr};
use huffcode::{build, code_table, count_bytes, translate, BitReader, Node, TextBits};
use tracing::{debug, info, Level};

#[path = "huffcode/progress.rs"]
mod progress;
use progress::ProgressMonitor;

#[derive(Parser)]
#[command(version, about = "Build huffman code tables and decode bitstreams with them")]
struct Cli {
    /// Log more details, repeat for even more
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Count the bytes of a file and write the code table built from them
    Table {
        input: PathBuf,
        /// Where to write the code table, stdout if omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Decode a bitstream with a code table
    Decode {
        /// The code table the bitstream was written with
        #[arg(short, long)]
        table: PathBuf,
        bits: PathBuf,
        /// The bitstream is text made of '0' and '1' instead of packed bytes
        #[arg(long)]
        text: bool,
        /// Amount of bits in the packed bitstream, the rest of the last byte is padding
        #[arg(long, conflicts_with = "text")]
        bit_count: Option<usize>,
        /// Where to write the decoded bytes, stdout if omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the code length of every symbol of a code table
    Show { table: PathBuf },
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Table { input, output } => table(&input, output.as_deref()),
        Command::Decode {
            table,
            bits,
            text,
            bit_count,
            output,
        } => decode(&table, &bits, text, bit_count, output.as_deref()),
        Command::Show { table } => show(&table),
    }
}

fn read_input(path: &Path) -> color_eyre::Result<Vec<u8>> {
    let file = File::open(path).wrap_err_with(|| format!("failed to open {}", path.display()))?;
    let size = file.metadata()?.len() as usize;
    let mut data = Vec::with_capacity(size);
    ProgressMonitor::new(file, size)
        .read_to_end(&mut data)
        .wrap_err_with(|| format!("failed to read {}", path.display()))?;
    debug!("read {} bytes from {}", data.len(), path.display());
    Ok(data)
}

fn open_output(path: Option<&Path>) -> color_eyre::Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).wrap_err_with(|| format!("failed to create {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(std::io::stdout().lock())),
    })
}

fn load_table(path: &Path) -> color_eyre::Result<Node> {
    let file = File::open(path).wrap_err_with(|| format!("failed to open {}", path.display()))?;
    code_table::load(file).wrap_err_with(|| format!("failed to load code table {}", path.display()))
}

fn table(input: &Path, output: Option<&Path>) -> color_eyre::Result<()> {
    let data = read_input(input)?;
    let frequencies = count_bytes(&data);
    let root = build(&frequencies)
        .wrap_err_with(|| format!("{} contains no bytes to build a code from", input.display()))?;

    let encoded_bits: u64 = root
        .code_lengths()
        .into_iter()
        .map(|(symbol, len)| frequencies[symbol as usize] * len as u64)
        .sum();
    info!(
        "built code for {} distinct bytes, longest code: {} bits, encoded size: {} bits ({} input bytes)",
        root.leaf_count(),
        root.depth(),
        encoded_bits,
        data.len()
    );

    code_table::save(&root, open_output(output)?)?;
    Ok(())
}

fn decode(
    table: &Path,
    bits: &Path,
    text: bool,
    bit_count: Option<usize>,
    output: Option<&Path>,
) -> color_eyre::Result<()> {
    let root = load_table(table)?;
    let data = read_input(bits)?;
    let mut out = open_output(output)?;

    let written = if text {
        let text = std::str::from_utf8(&data)
            .wrap_err_with(|| format!("{} is not a textual bitstream", bits.display()))?;
        write_symbols(&root, TextBits::new(text)?, &mut out)?
    } else {
        let reader = match bit_count {
            Some(bit_count) => BitReader::with_bit_len(&data, bit_count)?,
            None => BitReader::new(&data),
        };
        write_symbols(&root, reader, &mut out)?
    };
    out.flush()?;

    info!("decoded {} bytes", written);
    Ok(())
}

fn write_symbols<I: Iterator<Item = bool>>(
    root: &Node,
    bits: I,
    out: &mut dyn Write,
) -> color_eyre::Result<usize> {
    let mut written = 0;
    for symbol in translate(root, bits) {
        let symbol = symbol?;
        let byte = u8::try_from(symbol)
            .map_err(|_| eyre!("decoded symbol {} does not fit into a byte", symbol))?;
        out.write_all(&[byte])?;
        written += 1;
    }
    Ok(written)
}

fn show(table: &Path) -> color_eyre::Result<()> {
    let root = load_table(table)?;
    info!(
        "{} symbols, longest code: {} bits",
        root.leaf_count(),
        root.depth()
    );

    let mut out = std::io::stdout().lock();
    for (symbol, len) in root.code_lengths() {
        writeln!(out, "{}\t{}", symbol, len)?;
    }
    Ok(())
}
