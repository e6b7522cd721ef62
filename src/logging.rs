/*!

Global control over diagnostic messaging. Messages are sent to a channel and carry a verbosity level;
a message is only emitted if the global verbosity is at least the message's level. Nothing here affects
the result of a computation.

*/

use strum_macros::{Display, IntoStaticStr};
use yansi::Paint;

pub use verbosity::*;

#[derive(Copy, Clone, PartialEq, Eq, Display, IntoStaticStr, Debug, Hash)]
pub enum Channel {
  Error,
  Warning,
  Notice,
  Info,
  Debug,
}

impl Channel {
  fn tag(&self) -> String {
    let name: &'static str = (*self).into();
    match self {
      Channel::Error   => Paint::red(name).bold().to_string(),
      Channel::Warning => Paint::yellow(name).bold().to_string(),
      Channel::Notice  => Paint::cyan(name).to_string(),
      Channel::Info    => Paint::green(name).to_string(),
      Channel::Debug   => Paint::blue(name).to_string(),
    }
  }
}

/// Emits `msg` on `channel` if the verbosity is at least `level`.
pub fn log(channel: Channel, level: i32, msg: &str) {
  if let Some(line) = format_message(get_verbosity(), channel, level, msg) {
    verbose_emit(line.as_str());
  }
}

/// The line `log` would emit at the given verbosity, or `None` if the message is suppressed.
fn format_message(verbosity: i32, channel: Channel, level: i32, msg: &str) -> Option<String> {
  if verbosity >= level {
    Some(format!("{}: {}", channel.tag(), msg))
  } else {
    None
  }
}


pub(crate) mod verbosity {
  use std::{
    io::{Stdout, stdout, Write},
    sync::{
      Mutex,
      atomic::{AtomicI32, Ordering}
    }
  };

  use lazy_static::lazy_static;

  static VERBOSITY: AtomicI32 = AtomicI32::new(0);
  lazy_static! {
    static ref VERBOSE_STREAM: Mutex<Stdout> = Mutex::new(stdout());
  }

  pub fn set_verbosity(new_value: i32) {
    VERBOSITY.store(new_value, Ordering::Relaxed);
  }

  pub fn get_verbosity() -> i32 {
    VERBOSITY.load(Ordering::Relaxed)
  }

  pub(crate) fn verbose_emit(msg: &str) {
    // A poisoned stream only means another thread panicked mid-write.
    let mut stream = match VERBOSE_STREAM.lock() {
      Ok(guard) => guard,
      Err(poisoned) => poisoned.into_inner()
    };
    write_line(&mut *stream, msg);
  }

  pub(crate) fn write_line<W: Write>(stream: &mut W, msg: &str) {
    let _ = stream.write_all(msg.as_bytes());
    let _ = stream.write_all("\n".as_bytes());
  }
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn channel_names() {
    assert_eq!(Channel::Debug.to_string(), "Debug");
    let name: &'static str = Channel::Warning.into();
    assert_eq!(name, "Warning");
  }

  #[test]
  fn verbosity_gates_messages() {
    let emitted = format_message(3, Channel::Info, 3, "emitted").unwrap();
    assert!(emitted.contains("Info"));
    assert!(emitted.ends_with(": emitted"));

    assert_eq!(format_message(3, Channel::Debug, 5, "suppressed"), None);
    assert_eq!(format_message(0, Channel::Error, 1, "suppressed"), None);
  }

  #[test]
  fn emitted_lines_are_terminated() {
    let mut buffer: Vec<u8> = Vec::new();
    write_line(&mut buffer, "first");
    write_line(&mut buffer, "second");
    assert_eq!(String::from_utf8(buffer).unwrap(), "first\nsecond\n");
  }
}
