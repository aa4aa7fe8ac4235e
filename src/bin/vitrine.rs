use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "vitrine", version)]
struct Cli {
    /// Log debug events to stderr (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the testimonials carousel markup.
    Render(RenderArgs),
    /// Replay a scripted scenario and print the JSON trace.
    Simulate(SimulateArgs),
    /// Validate contact form values.
    CheckContact(CheckContactArgs),
    /// Print a WhatsApp deep link.
    Whatsapp(WhatsappArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Testimonials JSON (defaults to the bundled testimonials).
    #[arg(long)]
    data: Option<PathBuf>,

    /// Site config JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Slide to show (0-based).
    #[arg(long, default_value_t = 0)]
    index: usize,

    /// Output HTML path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Scenario JSON.
    #[arg(long)]
    scenario: PathBuf,

    /// Testimonials JSON (defaults to the bundled testimonials).
    #[arg(long)]
    data: Option<PathBuf>,

    /// Site config JSON.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct CheckContactArgs {
    /// Contact name.
    #[arg(long, default_value = "")]
    name: String,
    /// E-mail address.
    #[arg(long, default_value = "")]
    email: String,
    /// Optional unless --require-phone is set.
    #[arg(long, default_value = "")]
    phone: String,
    /// Message body.
    #[arg(long, default_value = "")]
    message: String,
    /// Treat the phone as a required field.
    #[arg(long)]
    require_phone: bool,
}

#[derive(Parser, Debug)]
struct WhatsappArgs {
    /// Phone number (defaults to the configured site number).
    #[arg(long)]
    phone: Option<String>,

    /// Section the button sits in; picks the greeting.
    #[arg(long, value_enum, default_value_t = SectionChoice::Other)]
    section: SectionChoice,

    /// Custom message instead of the section greeting.
    #[arg(long)]
    message: Option<String>,

    /// Site config JSON.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SectionChoice {
    Home,
    Services,
    Cases,
    Contact,
    Other,
}

impl From<SectionChoice> for vitrine::PageSection {
    fn from(choice: SectionChoice) -> Self {
        match choice {
            SectionChoice::Home => Self::Home,
            SectionChoice::Services => Self::Services,
            SectionChoice::Cases => Self::Cases,
            SectionChoice::Contact => Self::Contact,
            SectionChoice::Other => Self::Other,
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Simulate(args) => cmd_simulate(args),
        Command::CheckContact(args) => cmd_check_contact(args),
        Command::Whatsapp(args) => cmd_whatsapp(args),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn open(path: &Path) -> anyhow::Result<BufReader<File>> {
    let f = File::open(path).with_context(|| format!("open '{}'", path.display()))?;
    Ok(BufReader::new(f))
}

fn read_site_config(path: Option<&Path>) -> anyhow::Result<vitrine::SiteConfig> {
    let Some(path) = path else {
        return Ok(vitrine::SiteConfig::default());
    };
    let config = vitrine::SiteConfig::from_json_reader(open(path)?)
        .with_context(|| format!("load config '{}'", path.display()))?;
    Ok(config)
}

fn read_records(path: Option<&Path>) -> anyhow::Result<Vec<vitrine::TestimonialRecord>> {
    let records = match path {
        Some(path) => vitrine::load_records_json(open(path)?)
            .with_context(|| format!("load testimonials '{}'", path.display()))?,
        None => vitrine::default_records().context("load bundled testimonials")?,
    };
    Ok(records)
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<ExitCode> {
    let config = read_site_config(args.config.as_deref())?;
    let records = read_records(args.data.as_deref())?;
    if args.index >= records.len() {
        anyhow::bail!(
            "slide index {} out of range ({} testimonials)",
            args.index,
            records.len()
        );
    }

    let view = vitrine::HtmlView::new(records.clone(), config.labels.clone());
    let mut carousel = vitrine::Carousel::mount(
        records,
        Some(view),
        vitrine::ManualScheduler::new(),
        config.carousel.clone(),
    );
    if !carousel.is_running() {
        anyhow::bail!("carousel did not start (see warnings above)");
    }
    carousel.go_to_slide(args.index);

    let markup = carousel
        .view()
        .map(|v| v.markup().to_owned())
        .context("carousel has no view")?;

    match args.out {
        Some(out) => {
            if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(&out, markup)
                .with_context(|| format!("write html '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => println!("{markup}"),
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<ExitCode> {
    let config = read_site_config(args.config.as_deref())?;
    let records = read_records(args.data.as_deref())?;
    let scenario: vitrine::Scenario = serde_json::from_reader(open(&args.scenario)?)
        .with_context(|| format!("parse scenario '{}'", args.scenario.display()))?;

    let trace = vitrine::replay(records, &config.carousel, &scenario)?;
    println!("{}", serde_json::to_string_pretty(&trace)?);
    Ok(ExitCode::SUCCESS)
}

fn cmd_check_contact(args: CheckContactArgs) -> anyhow::Result<ExitCode> {
    use vitrine::{FieldKind, FormField};

    let fields = [
        FormField::new(FieldKind::Name, args.name, true),
        FormField::new(FieldKind::Email, args.email, true),
        FormField::new(FieldKind::Phone, args.phone, args.require_phone),
        FormField::new(FieldKind::Message, args.message, true),
    ];
    let report = vitrine::validate_form(&fields);
    if report.is_valid() {
        println!("ok");
        return Ok(ExitCode::SUCCESS);
    }
    for (field, err) in &report.errors {
        println!("{field}: {err}");
    }
    Ok(ExitCode::FAILURE)
}

fn cmd_whatsapp(args: WhatsappArgs) -> anyhow::Result<ExitCode> {
    let config = read_site_config(args.config.as_deref())?;
    let phone = args.phone.unwrap_or(config.whatsapp_phone);
    if vitrine::format_phone(&phone).is_empty() {
        anyhow::bail!("phone '{phone}' has no digits");
    }
    let message = args
        .message
        .unwrap_or_else(|| vitrine::section_message(args.section.into()).to_owned());
    println!("{}", vitrine::whatsapp_url(&phone, &message));
    Ok(ExitCode::SUCCESS)
}
