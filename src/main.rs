use clap::{Parser, Subcommand};
use genimg::config::{self, AppConfig};
use genimg::dimensions::{DimensionEvent, RatioPreset};
use genimg::gallery::{self, GalleryError, GeneratedImage, PhotoRecord};
use genimg::session::SavedConfig;
use genimg::store::Store;
use genimg::{output, render};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "genimg")]
#[command(about = "Prompt and dimension workbench for AI image generation")]
#[command(long_about = "\
Prompt and dimension workbench for AI image generation

Keeps a form session (prompt, negative prompt, output size) and a gallery of
generated images on disk between runs. Output sizes stay within 64..=1440
pixels and on a 16 pixel grid.

Dimension controls:

  width / height <RAW>        Type a value; it is clamped, then rounded to 16
  drag-width / drag-height    Slider input, same rules as typing
  lock                        Hold the current ratio; editing one side derives the other
  swap                        Exchange width and height and flip preset labels
  preset <LABEL>              Long side 1024 at the shown ratio (see `presets`)

Run 'genimg gen-config' to generate a documented genimg.toml.")]
#[command(version)]
struct Cli {
    /// Config file
    #[arg(long, default_value = config::CONFIG_FILENAME, global = true)]
    config: PathBuf,

    /// Directory for saved session and gallery (overrides [store] dir)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the current session
    Show,
    /// Commit a typed width
    Width {
        #[arg(allow_hyphen_values = true)]
        raw: String,
    },
    /// Commit a typed height
    Height {
        #[arg(allow_hyphen_values = true)]
        raw: String,
    },
    /// Set the width from a slider position
    DragWidth {
        #[arg(allow_negative_numbers = true)]
        value: f64,
    },
    /// Set the height from a slider position
    DragHeight {
        #[arg(allow_negative_numbers = true)]
        value: f64,
    },
    /// Exchange width and height
    Swap,
    /// Toggle the aspect-ratio lock
    Lock,
    /// Apply a ratio preset by its displayed label
    Preset { label: String },
    /// List ratio presets as currently displayed
    Presets,
    /// Set the prompt
    Prompt {
        text: String,
        /// Negative prompt (things to avoid)
        #[arg(long)]
        negative: Option<String>,
    },
    /// Print the generation request for the current session
    Request {
        /// Print the provider payload instead
        #[arg(long)]
        provider: bool,
    },
    /// Manage the photo gallery
    #[command(subcommand)]
    Gallery(GalleryCommand),
    /// Print a stock genimg.toml with all options documented
    GenConfig,
}

#[derive(Subcommand)]
enum GalleryCommand {
    /// List photos, newest first
    List,
    /// Show one photo
    Show { id: u64 },
    /// Remove a photo from the gallery
    Delete { id: u64 },
    /// Load a photo's prompt and size into the session
    Copy { id: u64 },
    /// Move the listed photos to the front, in the order given
    Order {
        #[arg(required = true)]
        ids: Vec<u64>,
    },
    /// Record a generated image
    Add {
        #[arg(long)]
        prompt: String,
        #[arg(long)]
        width: u32,
        #[arg(long)]
        height: u32,
        #[arg(long)]
        negative: Option<String>,
        /// Image filename; defaults to a timestamped name
        #[arg(long)]
        filename: Option<String>,
        #[arg(long)]
        id: Option<u64>,
    },
    /// Write the gallery as a static HTML page
    Render {
        #[arg(long)]
        out: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    // Works without a readable config file.
    if let Command::GenConfig = cli.command {
        print!("{}", config::stock_config_toml());
        return Ok(());
    }

    let app_config = config::load_config(&cli.config)?;
    let store = Store::new(
        cli.store
            .clone()
            .unwrap_or_else(|| PathBuf::from(&app_config.store.dir)),
    );
    log::debug!("using store at {}", store.dir().display());

    match cli.command {
        Command::Show => {
            output::print_session(&load_session(&store, &app_config));
        }
        Command::Width { raw } => {
            update_dimensions(&store, &app_config, DimensionEvent::CommitWidth(raw))?;
        }
        Command::Height { raw } => {
            update_dimensions(&store, &app_config, DimensionEvent::CommitHeight(raw))?;
        }
        Command::DragWidth { value } => {
            update_dimensions(&store, &app_config, DimensionEvent::DragWidth(value))?;
        }
        Command::DragHeight { value } => {
            update_dimensions(&store, &app_config, DimensionEvent::DragHeight(value))?;
        }
        Command::Swap => {
            update_dimensions(&store, &app_config, DimensionEvent::Swap)?;
        }
        Command::Lock => {
            update_dimensions(&store, &app_config, DimensionEvent::ToggleLock)?;
        }
        Command::Preset { label } => {
            let orientation = load_session(&store, &app_config).solver_state().orientation;
            let preset = RatioPreset::from_display_label(&label, orientation)?;
            update_dimensions(&store, &app_config, DimensionEvent::ApplyPreset(preset))?;
        }
        Command::Presets => {
            let orientation = load_session(&store, &app_config).solver_state().orientation;
            output::print_presets(orientation);
        }
        Command::Prompt { text, negative } => {
            let mut session = load_session(&store, &app_config);
            session.set_prompt(text);
            if let Some(negative) = negative {
                session.set_negative_prompt(negative);
            }
            store.save_config(&session)?;
            output::print_session(&session);
        }
        Command::Request { provider } => {
            let request = load_session(&store, &app_config).to_request()?;
            let json = if provider {
                serde_json::to_string_pretty(&request.provider_body(&app_config.generation))?
            } else {
                serde_json::to_string_pretty(&request)?
            };
            println!("{}", json);
        }
        Command::Gallery(command) => run_gallery(command, &store, &app_config)?,
        Command::GenConfig => unreachable!("gen-config returns before config is loaded"),
    }

    Ok(())
}

fn run_gallery(
    command: GalleryCommand,
    store: &Store,
    app_config: &AppConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut photos = store.load_gallery();

    match command {
        GalleryCommand::List => output::print_gallery(&photos),
        GalleryCommand::Show { id } => {
            let photo = photos.get(id).ok_or(GalleryError::NotFound(id))?;
            output::print_photo(photo);
        }
        GalleryCommand::Delete { id } => {
            if !photos.remove(id) {
                return Err(GalleryError::NotFound(id).into());
            }
            store.save_gallery(&photos)?;
            println!("Deleted #{}", id);
        }
        GalleryCommand::Copy { id } => {
            let mut session = load_session(store, app_config);
            photos.copy_settings(id, &mut session)?;
            store.save_config(&session)?;
            output::print_session(&session);
        }
        GalleryCommand::Order { ids } => {
            photos.order_by(&ids);
            store.save_gallery(&photos)?;
            output::print_gallery(&photos);
        }
        GalleryCommand::Add {
            prompt,
            width,
            height,
            negative,
            filename,
            id,
        } => {
            let image = GeneratedImage {
                id: match id {
                    Some(id) => id,
                    None => photos.next_id()?,
                },
                filename: filename.unwrap_or_else(|| {
                    gallery::generated_filename(&chrono::Local::now().naive_local())
                }),
                width,
                height,
                prompt,
                negative_prompt: negative,
            };
            let photo = PhotoRecord::from_generated(
                image,
                &app_config.gallery.image_base_url,
                gallery::created_at_now(),
            );
            log::info!("adding photo #{} ({})", photo.id, photo.filename);
            photos.add(photo.clone())?;
            store.save_gallery(&photos)?;
            output::print_photo(&photo);
        }
        GalleryCommand::Render { out } => {
            let session = load_session(store, app_config);
            let markup = render::render_gallery(&photos, &session);
            if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&out, markup.into_string())?;
            println!("Wrote {}", out.display());
        }
    }

    Ok(())
}

/// Saved session, or a fresh one seeded from `[defaults]`.
fn load_session(store: &Store, app_config: &AppConfig) -> SavedConfig {
    store
        .load_config()
        .unwrap_or_else(|| SavedConfig::from_defaults(&app_config.defaults))
}

/// Apply one dimension event to the saved session and print the result.
fn update_dimensions(
    store: &Store,
    app_config: &AppConfig,
    event: DimensionEvent,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = load_session(store, app_config);
    let before = session.solver_state();
    let after = before.apply(&event);
    log::debug!("{:?}: {} -> {}", event, before.pair, after.pair);
    session.apply_solver_state(&after);
    store.save_config(&session)?;
    output::print_session(&session);
    Ok(())
}
