use anyhow::Result;
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

use asteroid_view::algorithms::{convex_hull, narrowest_view, view_angles};
use asteroid_view::choose_asteroid;
use asteroid_view::input::read_asteroids;

#[derive(Parser)]
#[command(name = "asteroid-view")]
#[command(about = "Pick the asteroid with the narrowest view of the others")]
struct Cmd {
  /// Asteroid file: a count line followed by one `x y` line per asteroid
  file: PathBuf,

  /// Write every hull vertex and its view angle to stderr
  #[arg(long)]
  angles: bool,

  /// Log more (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = ArgAction::Count)]
  verbose: u8,

  /// Only log errors
  #[arg(short, long, conflicts_with = "verbose")]
  quiet: bool,
}

impl Cmd {
  fn log_level(&self) -> Level {
    if self.quiet {
      return Level::ERROR;
    }
    match self.verbose {
      0 => Level::WARN,
      1 => Level::INFO,
      2 => Level::DEBUG,
      _ => Level::TRACE,
    }
  }
}

fn main() -> Result<()> {
  let cmd = Cmd::parse();
  SubscriberBuilder::default()
    .with_target(false)
    .with_writer(std::io::stderr)
    .with_max_level(cmd.log_level())
    .init();

  let asteroids = read_asteroids(&cmd.file)?;
  tracing::info!(file = %cmd.file.display(), asteroids = asteroids.len(), "read asteroids");

  let chosen = if cmd.angles {
    let hull = convex_hull(asteroids)?;
    for (vertex, angle) in view_angles(&hull)? {
      eprintln!("{} {}", vertex, angle);
    }
    narrowest_view(&hull)?
  } else {
    choose_asteroid(asteroids)?
  };
  println!("{}", chosen);
  Ok(())
}
