pub mod chronometer;
pub mod configuration;
pub mod logger;

use self::{
    configuration::{Configuration, Format},
    logger::Logger,
};
use serde_json::json;
use std::{env, fmt, process, str::FromStr};
use universal_encoder::{Codec, Converter};

const USAGE: &str = "Usage: universal-encoder <convert|encode|decode> <value>";

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Command {
    Convert,
    Encode,
    Decode,
}

impl FromStr for Command {
    type Err = configuration::Error;

    fn from_str(command: &str) -> Result<Self, Self::Err> {
        match command {
            "convert" => Ok(Self::Convert),
            "encode" => Ok(Self::Encode),
            "decode" => Ok(Self::Decode),
            _ => Err(configuration::Error::new(format!("Unknown command \"{}\"", command))),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Convert => write!(f, "convert"),
            Self::Encode => write!(f, "encode"),
            Self::Decode => write!(f, "decode"),
        }
    }
}

#[derive(Debug, Eq, PartialEq)]
enum Output {
    Text(String),
    Bytes(Vec<u8>),
}

fn codec(configuration: &Configuration) -> Result<Codec, universal_encoder::Error> {
    Ok(Codec::from_spec(configuration.output_radix())?
        .with_pad(configuration.pad())
        .with_padding(configuration.padding()))
}

fn run(command: Command, value: &str, configuration: &Configuration, logger: &Logger) -> Result<Output, universal_encoder::Error> {
    match command {
        Command::Convert => {
            let converter = Converter::from_specs(configuration.input_radix(), configuration.output_radix())?;
            logger.log(format!("Converting {} symbols from {} to {}", value.chars().count(), configuration.input(), configuration.output()));
            converter.convert(value).map(Output::Text)
        }
        Command::Encode => {
            let codec = codec(configuration)?;
            logger.log_with(|| {
                format!(
                    "Encoding {} bytes to {} ({} bits per symbol, {} bit groups)",
                    value.len(),
                    configuration.output(),
                    codec.bits_per_symbol(),
                    codec.group_bits()
                )
            });
            Ok(Output::Text(codec.encode(value.as_bytes())))
        }
        Command::Decode => {
            let codec = codec(configuration)?;
            logger.log(format!("Decoding {} symbols from {}", value.chars().count(), configuration.output()));
            let bytes = if configuration.strict() { codec.decode_strict(value)? } else { codec.decode(value)? };
            Ok(Output::Bytes(bytes))
        }
    }
}

fn respond(format: Format, output: Output) {
    match (format, output) {
        (Format::Text, Output::Text(text)) => println!("{}", text),
        (Format::Text, Output::Bytes(bytes)) => println!("{}", String::from_utf8_lossy(&bytes)),
        (Format::Json, Output::Text(text)) => println!("{}", json!(text)),
        (Format::Json, Output::Bytes(bytes)) => println!("{}", json!(bytes)),
    }
}

fn respond_error(format: Format, error: impl fmt::Display) {
    match format {
        Format::Text => eprintln!("{}", error),
        Format::Json => println!("{}", json!({"message": error.to_string()})),
    }
}

fn main() {
    let arguments: Vec<String> = env::args().skip(1).collect();
    let (command, value) = match arguments.as_slice() {
        [command, value] => (command, value),
        _ => {
            eprintln!("{}", USAGE);
            process::exit(2);
        }
    };

    let configuration = match Configuration::new() {
        Ok(configuration) => configuration,
        Err(error) => {
            eprintln!("{}", error.message());
            process::exit(2);
        }
    };

    let command: Command = match command.parse() {
        Ok(command) => command,
        Err(error) => {
            respond_error(configuration.format(), error);
            eprintln!("{}", USAGE);
            process::exit(2);
        }
    };

    let logger = Logger::new(configuration.verbose());
    logger.log(format!("Running {}", command));

    match run(command, value, &configuration, &logger) {
        Ok(output) => {
            logger.log("Done");
            respond(configuration.format(), output);
        }
        Err(error) => {
            respond_error(configuration.format(), error);
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{run, Command, Output};
    use crate::{configuration::Configuration, logger::Logger};
    use std::collections::HashMap;
    use universal_encoder::Error;

    fn configuration(variables: &[(&str, &str)]) -> Configuration {
        let variables: HashMap<&str, &str> = variables.iter().copied().collect();
        Configuration::from_lookup(|key| variables.get(key).map(|value| value.to_string())).unwrap()
    }

    #[test]
    fn commands() {
        let logger = Logger::new(false);
        let hex = configuration(&[("OUTPUT", "base16")]);
        assert_eq!(run(Command::Convert, "255", &hex, &logger), Ok(Output::Text(String::from("FF"))));
        let base64 = configuration(&[]);
        assert_eq!(run(Command::Encode, "Man", &base64, &logger), Ok(Output::Text(String::from("TWFu"))));
        assert_eq!(run(Command::Decode, "TQ==", &base64, &logger), Ok(Output::Bytes(b"M".to_vec())));
    }

    #[test]
    fn command_errors() {
        let logger = Logger::new(false);
        let decimal = configuration(&[("OUTPUT", "decimal")]);
        assert!(matches!(
            run(Command::Encode, "M", &decimal, &logger),
            Err(Error::UnsafeSymbolLength { .. })
        ));
        let strict = configuration(&[("STRICT", "true")]);
        assert_eq!(run(Command::Decode, "TQ", &strict, &logger), Err(Error::InvalidPadding));
        assert_eq!("shift".parse::<Command>().map_err(|error| error.to_string()), Err(String::from("Unknown command \"shift\"")));
    }
}
