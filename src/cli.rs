use crate::seed::Seeder;

pub const USAGE: &str = "usage: runway-admin <command>

commands:
  migrate [--steps N]                       apply pending steps
  rollback [N]                              roll back the last N steps (default 1)
  status                                    show applied and pending steps
  seed [all|permissions|templates|cms]      insert reference data";

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Migrate { steps: Option<u32> },
    Rollback { steps: u32 },
    Status,
    /// `None` runs every seeder.
    Seed { seeder: Option<Seeder> },
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UsageError {
    #[error("missing command\n\n{usage}", usage = USAGE)]
    MissingCommand,
    #[error("unknown command `{0}`\n\n{usage}", usage = USAGE)]
    UnknownCommand(String),
    #[error("invalid argument `{0}`\n\n{usage}", usage = USAGE)]
    InvalidArgument(String),
}

impl Command {
    /// Parses the arguments after the program name.
    pub fn parse(args: &[String]) -> Result<Self, UsageError> {
        let (command, rest) = args.split_first().ok_or(UsageError::MissingCommand)?;
        let rest: Vec<&str> = rest.iter().map(String::as_str).collect();

        match (command.as_str(), rest.as_slice()) {
            ("migrate", []) => Ok(Command::Migrate { steps: None }),
            ("migrate", ["--steps", n]) => Ok(Command::Migrate {
                steps: Some(count(n)?),
            }),
            ("rollback", []) => Ok(Command::Rollback { steps: 1 }),
            ("rollback", [n]) => Ok(Command::Rollback { steps: count(n)? }),
            ("status", []) => Ok(Command::Status),
            ("seed", []) | ("seed", ["all"]) => Ok(Command::Seed { seeder: None }),
            ("seed", [name]) => name
                .parse()
                .map(|seeder| Command::Seed {
                    seeder: Some(seeder),
                })
                .map_err(|_| UsageError::InvalidArgument(name.to_string())),
            ("migrate" | "rollback" | "status" | "seed", [extra, ..]) => {
                Err(UsageError::InvalidArgument(extra.to_string()))
            }
            (other, _) => Err(UsageError::UnknownCommand(other.to_string())),
        }
    }
}

fn count(arg: &str) -> Result<u32, UsageError> {
    match arg.parse() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(UsageError::InvalidArgument(arg.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Command, UsageError> {
        let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
        Command::parse(&args)
    }

    #[test]
    fn test_migrate() {
        assert_eq!(parse(&["migrate"]), Ok(Command::Migrate { steps: None }));
        assert_eq!(
            parse(&["migrate", "--steps", "3"]),
            Ok(Command::Migrate { steps: Some(3) })
        );
        assert_eq!(
            parse(&["migrate", "--steps", "0"]),
            Err(UsageError::InvalidArgument("0".into()))
        );
    }

    #[test]
    fn test_rollback_defaults_to_one() {
        assert_eq!(parse(&["rollback"]), Ok(Command::Rollback { steps: 1 }));
        assert_eq!(parse(&["rollback", "4"]), Ok(Command::Rollback { steps: 4 }));
        assert!(parse(&["rollback", "many"]).is_err());
    }

    #[test]
    fn test_seed() {
        assert_eq!(parse(&["seed"]), Ok(Command::Seed { seeder: None }));
        assert_eq!(parse(&["seed", "all"]), Ok(Command::Seed { seeder: None }));
        assert_eq!(
            parse(&["seed", "cms"]),
            Ok(Command::Seed {
                seeder: Some(Seeder::Cms)
            })
        );
        assert_eq!(
            parse(&["seed", "users"]),
            Err(UsageError::InvalidArgument("users".into()))
        );
    }

    #[test]
    fn test_bad_input() {
        assert_eq!(parse(&[]), Err(UsageError::MissingCommand));
        assert_eq!(
            parse(&["serve"]),
            Err(UsageError::UnknownCommand("serve".into()))
        );
        assert_eq!(
            parse(&["status", "now"]),
            Err(UsageError::InvalidArgument("now".into()))
        );
    }

    #[test]
    fn test_errors_print_usage() {
        let message = UsageError::UnknownCommand("serve".into()).to_string();
        assert!(message.starts_with("unknown command `serve`\n\n"));
        assert!(message.ends_with(USAGE));

        let message = UsageError::InvalidArgument("0".into()).to_string();
        assert_eq!(message, format!("invalid argument `0`\n\n{}", USAGE));
        assert!(UsageError::MissingCommand.to_string().ends_with(USAGE));
    }
}
