use std::env;
use std::ffi::OsStr;

use log::{debug, info};
use seahorse::{App, Command, Context, Flag, FlagType};

use time_utils::time::{Duration, Unit};

fn set_env_if_absent<K: AsRef<OsStr>, V: AsRef<OsStr>>(var: K, default: impl FnOnce() -> V) {
    if env::var(var.as_ref()).is_err() {
        env::set_var(var, default());
    }
}

fn main() {
    set_env_if_absent("RUST_APP_LOG", || "info");
    color_backtrace::install();
    pretty_env_logger::init_custom_env("RUST_APP_LOG");

    run();
}

mod seahorse_exts {
    use std::str::FromStr;

    use anyhow::Context as _;
    use log::error;
    use seahorse::Context;

    /// Logs the error of a failed command and exits the process.
    pub fn exit_on_error(result: anyhow::Result<()>) {
        if let Err(e) = result {
            error!("{:?}", e);
            ::std::process::exit(1);
        }
    }

    pub trait ContextExt {
        fn context(&self) -> &Context;

        fn required_string_flag(&self, name: &str) -> Result<String, anyhow::Error> {
            self.context()
                .string_flag(name)
                .ok()
                .ok_or_else(|| anyhow::anyhow!("missing required flag \"{}\"", name))
        }

        fn required_parsed_flag<T>(&self, name: &str) -> Result<T, anyhow::Error>
        where
            T: FromStr,
            T::Err: std::error::Error + Send + Sync + 'static,
        {
            let value = self.required_string_flag(name)?;
            value
                .parse()
                .with_context(|| format!("invalid value \"{}\" for flag \"{}\"", value, name))
        }

        fn single_arg(&self) -> Result<&str, anyhow::Error> {
            match self.context().args.as_slice() {
                [arg] => Ok(arg.as_str()),
                [] => Err(anyhow::anyhow!("missing duration argument")),
                _ => Err(anyhow::anyhow!("too many arguments, expected one duration")),
            }
        }
    }

    impl ContextExt for Context {
        fn context(&self) -> &Context {
            self
        }
    }
}

use seahorse_exts::{exit_on_error, ContextExt};

/// Accepts either a plain millisecond count or one of the rendered forms.
fn parse_duration(input: &str) -> anyhow::Result<Duration> {
    let duration = if !input.is_empty() && input.bytes().all(|byte| byte.is_ascii_digit()) {
        Duration::try_from_milliseconds(input.parse::<u64>()?)?
    } else {
        input.parse::<Duration>()?
    };

    debug!("parsed \"{}\" as {}", input, duration);

    Ok(duration)
}

fn show(context: &Context) -> anyhow::Result<()> {
    let duration = parse_duration(context.single_arg()?)?;

    if context.bool_flag("short") {
        println!("{}", duration.short());
    } else {
        println!("{}", duration);
    }

    Ok(())
}

fn add(context: &Context) -> anyhow::Result<()> {
    let mut duration = parse_duration(context.single_arg()?)?;
    let unit: Unit = context.required_parsed_flag("unit")?;
    let amount: u32 = context.required_parsed_flag("amount")?;

    info!("adding {} {} to {}", amount, unit, duration);
    duration.add(unit, amount);

    println!("{}", duration);
    Ok(())
}

fn decrement(context: &Context) -> anyhow::Result<()> {
    let mut duration = parse_duration(context.single_arg()?)?;
    let unit: Unit = context.required_parsed_flag("unit")?;

    duration.decrement(unit)?;

    println!("{}", duration);
    Ok(())
}

fn millis(context: &Context) -> anyhow::Result<()> {
    let duration = parse_duration(context.single_arg()?)?;

    println!("{}", duration.as_milliseconds());
    Ok(())
}

fn unit_flag() -> Flag {
    Flag::new("unit", FlagType::String)
        .description("The unit to change: days, hours, minutes, seconds or milliseconds.")
        .alias("u")
}

fn run() {
    let args: Vec<String> = env::args().collect();
    let program = args.first().cloned().unwrap_or_else(|| "time-utils".to_string());

    let show_command = Command::new("show")
        .usage(format!("{} show [--short] <duration>", program))
        .description("Prints the duration as `D-HH:MM:SS:MMMM` or `HH:MM:SS`.")
        .flag(
            Flag::new("short", FlagType::Bool)
                .description("[optional] Print `HH:MM:SS` instead of the long form.")
                .alias("s"),
        )
        .action(|context: &Context| exit_on_error(show(context)));

    let add_command = Command::new("add")
        .usage(format!(
            "{} add --unit <unit> --amount <amount> <duration>",
            program
        ))
        .description("Adds an amount of a unit to the duration, carrying into larger units.")
        .flag(unit_flag())
        .flag(
            Flag::new("amount", FlagType::String)
                .description("How much to add.")
                .alias("a"),
        )
        .action(|context: &Context| exit_on_error(add(context)));

    let decrement_command = Command::new("decrement")
        .usage(format!("{} decrement --unit <unit> <duration>", program))
        .description("Subtracts one of a unit, borrowing from larger units.")
        .flag(unit_flag())
        .action(|context: &Context| exit_on_error(decrement(context)));

    let millis_command = Command::new("millis")
        .usage(format!("{} millis <duration>", program))
        .description("Prints the total number of milliseconds of the duration.")
        .action(|context: &Context| exit_on_error(millis(context)));

    let app = App::new(env!("CARGO_PKG_NAME"))
        .description(env!("CARGO_PKG_DESCRIPTION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .usage(format!("{} [command] [args]", program))
        .command(show_command)
        .command(add_command)
        .command(decrement_command)
        .command(millis_command);

    app.run(args);
}
