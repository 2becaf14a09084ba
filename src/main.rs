//! `linetrack` - command-line interface.
//!
//! Every command reads a track text file, applies one operation and writes the
//! result back (edits) or exports it (PNG, markdown, print jobs, terminal).

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::{self, Command};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use line_track_designer::core::{read_track, save_txt, Track, TrackError, DEFAULT_NAME};
use line_track_designer::export::{print_track, save_md, CupsSpooler, DEFAULT_MEDIA};
use line_track_designer::raster::{catalog, Compositor, TileCatalog};
use line_track_designer::term;
use line_track_designer::types::{is_valid_tile, Orientation};

#[derive(Parser)]
#[command(name = "linetrack")]
#[command(about = "Generate line following tracks for robots", long_about = None)]
struct Cli {
    /// Log every operation (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Directory holding the tile artwork (linefollowtiles-NN.png)
    #[arg(long, global = true, env = "LINETRACK_TILES_DIR", default_value = "tiles")]
    tiles_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show track FILENAME in the terminal
    Show {
        filename: PathBuf,
        /// Print once instead of opening the full-screen viewer
        #[arg(long)]
        inline: bool,
    },
    /// Write track FILENAME in the command prompt
    Write { filename: PathBuf },
    /// Dimensions and tiles required by track FILENAME
    Info {
        filename: PathBuf,
        /// Print a JSON summary
        #[arg(long)]
        json: bool,
    },
    /// Create empty track FILENAME with NROW rows and NCOL columns
    Create {
        filename: PathBuf,
        nrow: usize,
        ncol: usize,
        /// Open the new file in $EDITOR
        #[arg(long)]
        edit: bool,
    },
    /// Edit track FILENAME in $EDITOR
    Edit { filename: PathBuf },
    /// Add a column to track FILENAME
    Addcol { filename: PathBuf },
    /// Add a row to track FILENAME
    Addrow { filename: PathBuf },
    /// Delete column COL from track FILENAME
    Delcol { filename: PathBuf, col: usize },
    /// Delete row ROW from track FILENAME
    Delrow { filename: PathBuf, row: usize },
    /// Set the tile at ROW, COL of track FILENAME, growing the track if needed
    Set {
        filename: PathBuf,
        row: usize,
        col: usize,
        tile: i64,
        /// Orientation (0-3, quarter-turns clockwise)
        #[arg(short, long, default_value_t = 0)]
        orient: i64,
    },
    /// Rotate track FILENAME clockwise
    Rotate {
        filename: PathBuf,
        /// Number of quarter-turns (negative turns counter-clockwise)
        #[arg(short, default_value_t = 1, allow_negative_numbers = true)]
        n: i32,
    },
    /// Save track FILENAME as PNG file
    Savepng {
        filename: PathBuf,
        /// Name of the PNG file (default: FILENAME with .png)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Save track FILENAME as MD file
    Savemd {
        filename: PathBuf,
        /// Name of the MD file (default: FILENAME with .md)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Name of the track
        #[arg(short, long, default_value = "Track")]
        name: String,
        /// Description of the track
        #[arg(short, long, default_value = "")]
        description: String,
    },
    /// Print the tiles of track FILENAME
    Printing {
        filename: PathBuf,
        /// Printer name (default: the system default printer)
        #[arg(long, env = "LINETRACK_PRINTER")]
        printer: Option<String>,
        /// Paper format
        #[arg(long, default_value = DEFAULT_MEDIA)]
        media: String,
        /// PDF with one tile per page
        #[arg(
            long,
            env = "LINETRACK_TILES_PDF",
            default_value = "tiles/linefollowtiles.pdf"
        )]
        document: PathBuf,
        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// Export tile NUMBER as PNG file
    Tile {
        number: i64,
        /// Orientation (0-3, quarter-turns clockwise)
        #[arg(short, long, default_value_t = 0)]
        orient: i64,
        /// PNG file to write
        #[arg(long)]
        output: PathBuf,
    },
    /// List the tiles of the catalog
    Catalog,
    /// Largest track fitting in WIDTH x HEIGHT millimetres
    Maxshape { width: u32, height: u32 },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let tiles_dir = cli.tiles_dir;
    match cli.command {
        Commands::Show { filename, inline } => {
            let track = read(&filename)?;
            if inline {
                term::print_track(&track)?;
            } else {
                term::run_viewer(&track)?;
            }
        }
        Commands::Write { filename } => {
            let track = read(&filename)?;
            println!("{}", track);
            info!("Track written");
        }
        Commands::Info { filename, json } => {
            let track = read(&filename)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&track.summary())?);
            } else {
                print_info(&track);
            }
        }
        Commands::Create {
            filename,
            nrow,
            ncol,
            edit,
        } => {
            save(&Track::zeros(nrow, ncol, DEFAULT_NAME), &filename)?;
            if edit {
                open_editor(&filename)?;
            }
        }
        Commands::Edit { filename } => {
            if !filename.is_file() {
                return Err(TrackError::FileNotFound(filename).into());
            }
            info!(path = %filename.display(), "Editing track");
            open_editor(&filename)?;
        }
        Commands::Addcol { filename } => edit_file(&filename, |t| {
            t.add_col();
            Ok(())
        })?,
        Commands::Addrow { filename } => edit_file(&filename, |t| {
            t.add_row();
            Ok(())
        })?,
        Commands::Delcol { filename, col } => edit_file(&filename, |t| t.del_col(col))?,
        Commands::Delrow { filename, row } => edit_file(&filename, |t| t.del_row(row))?,
        Commands::Set {
            filename,
            row,
            col,
            tile,
            orient,
        } => edit_file(&filename, |t| t.set_tile(row, col, tile, orient))?,
        Commands::Rotate { filename, n } => edit_file(&filename, |t| {
            t.rotate(n);
            Ok(())
        })?,
        Commands::Savepng { filename, output } => {
            let track = read(&filename)?;
            let output = output.unwrap_or_else(|| filename.with_extension("png"));
            let catalog = load_catalog(&tiles_dir)?;
            Compositor::default()
                .save_png(&track, catalog, &output)
                .with_context(|| format!("cannot export {}", output.display()))?;
        }
        Commands::Savemd {
            filename,
            output,
            name,
            description,
        } => {
            let track = read_track(&filename, name)?;
            let output = output.unwrap_or_else(|| filename.with_extension("md"));
            let catalog = load_catalog(&tiles_dir)?;
            save_md(&track, &output, &description, &Compositor::default(), catalog)
                .with_context(|| format!("cannot export {}", output.display()))?;
        }
        Commands::Printing {
            filename,
            printer,
            media,
            document,
            yes,
        } => {
            let track = read(&filename)?;
            if !yes && !confirm("Do you want to print the track?")? {
                return Ok(());
            }
            let spooler = CupsSpooler::discover(printer)?;
            let jobs = print_track(&track, &spooler, &document, &media)?;
            println!("{} print jobs sent to {}", jobs, spooler.printer());
        }
        Commands::Tile {
            number,
            orient,
            output,
        } => {
            if !is_valid_tile(number) {
                return Err(TrackError::InvalidTile(number).into());
            }
            let orient = Orientation::from_index(orient).ok_or(TrackError::InvalidOrient(orient))?;
            let catalog = load_catalog(&tiles_dir)?;
            let tile = catalog.get(number as u8)?;
            tile.oriented(orient)
                .save(&output)
                .with_context(|| format!("cannot write {}", output.display()))?;
            info!(tile = number, path = %output.display(), "Tile exported");
        }
        Commands::Catalog => {
            let catalog = load_catalog(&tiles_dir)?;
            for tile in catalog.iter() {
                println!("{:>2}  {}", tile.number(), tile.name());
            }
        }
        Commands::Maxshape { width, height } => {
            let (a, b) = Track::max_shape(width, height);
            println!("{} {}", a, b);
        }
    }
    Ok(())
}

fn read(path: &Path) -> Result<Track> {
    read_track(path, DEFAULT_NAME).with_context(|| format!("cannot read {}", path.display()))
}

fn save(track: &Track, path: &Path) -> Result<()> {
    save_txt(track, path).with_context(|| format!("cannot write {}", path.display()))
}

/// Read, modify and write back a track file.
fn edit_file(
    path: &Path,
    f: impl FnOnce(&mut Track) -> line_track_designer::core::Result<()>,
) -> Result<()> {
    let mut track = read(path)?;
    f(&mut track)?;
    save(&track, path)
}

fn load_catalog(dir: &Path) -> Result<&'static TileCatalog> {
    catalog::init_global(dir)
        .with_context(|| format!("cannot load tiles from {}", dir.display()))
}

fn print_info(track: &Track) {
    let (w, h) = track.dimensions();
    println!("{} rows x {} columns", track.rows(), track.cols());
    println!("{} mm x {} mm", w, h);
    for (tile, copies) in track.occurrences() {
        println!("tile {:>2}: {}", tile, copies);
    }
}

fn open_editor(path: &Path) -> Result<()> {
    let editor = std::env::var("VISUAL")
        .or_else(|_| std::env::var("EDITOR"))
        .unwrap_or_else(|_| "vi".to_string());
    let status = Command::new(&editor)
        .arg(path)
        .status()
        .with_context(|| format!("cannot start editor {}", editor))?;
    if !status.success() {
        bail!("editor {} exited with {}", editor, status);
    }
    Ok(())
}

fn confirm(question: &str) -> Result<bool> {
    print!("{} [y/N]: ", question);
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes" | "Yes"))
}
