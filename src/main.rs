use gotoxy::{Error, Tty, WindowSize};
use log::{debug, warn};
use nix::sys::termios::{tcgetattr, tcsetattr, SetArg};
use std::process;
use structopt::StructOpt;

#[derive(StructOpt, Debug)]
#[structopt(name = "gotoxy", about = "query and move the terminal cursor")]
enum Command {
    /// Print the zero-based cursor column and row
    Cursor {
        /// Print the terminal's reply instead of the parsed position
        #[structopt(long)]
        raw: bool,
    },
    /// Move the cursor to a zero-based column and row
    Goto { x: u16, y: u16 },
    /// Print the terminal size as columns and lines
    Size,
    /// Set the terminal size reported by the kernel
    Resize { columns: u16, lines: u16 },
}

/// A SIGTERM while waiting on the cursor reply would leave the terminal raw.
fn restore_on_termination(tty: Tty) {
    let saved = match tcgetattr(tty.input()) {
        Ok(saved) => saved,
        Err(e) => {
            debug!("not saving terminal attributes: {}", e);
            return;
        }
    };
    let fd = tty.input();
    let result = ctrlc::set_handler(move || {
        let _ = tcsetattr(fd, SetArg::TCSANOW, &saved);
        process::exit(130);
    });
    if let Err(e) = result {
        warn!("signal handler: {}", e);
    }
}

fn run(command: Command, tty: Tty) -> Result<(), Error> {
    match command {
        Command::Cursor { raw: true } => {
            let reply = tty.read_cursor_position()?;
            println!("{}", reply.escape_ascii());
        }
        Command::Cursor { raw: false } => {
            let position = tty.cursor_position()?;
            println!("{} {}", position.x, position.y);
        }
        Command::Goto { x, y } => {
            tty.set_cursor_position(gotoxy::CursorPosition::new(x, y))?;
        }
        Command::Size => {
            let size = tty.window_size()?;
            println!("{} {}", size.columns, size.lines);
        }
        Command::Resize { columns, lines } => {
            tty.set_window_size(WindowSize::new(columns, lines))?;
            println!("{}", gotoxy::SUCCESS);
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();

    let command = Command::from_args();
    debug!("{:?}", command);

    let tty = Tty::stdio();
    restore_on_termination(tty);

    if let Err(e) = run(command, tty) {
        eprintln!("{}", e);
        process::exit(1);
    }
}
