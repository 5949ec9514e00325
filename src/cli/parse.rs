use super::CliFlags;
use crate::error::{Error, Result};

pub fn parse(args: &[String]) -> Result<CliFlags> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-b" | "--board" => flags.clipboard = true,
            "-s" | "--saved" => flags.saved = true,
            "--save" => flags.save = true,
            "--no-letters" => flags.no_letters = true,
            "--no-digits" => flags.no_digits = true,
            "--no-symbols" => flags.no_symbols = true,
            "-l" | "--length" => {
                i += 1;
                flags.length = Some(args.get(i).cloned().unwrap_or_default());
            }
            "-n" | "--number" => {
                i += 1;
                let raw = value(args, i)?;
                flags.number = Some(raw.parse().map_err(|_| Error::InvalidNumber(raw.clone()))?);
            }
            "--seed" => {
                i += 1;
                let raw = value(args, i)?;
                flags.seed = Some(raw.parse().map_err(|_| Error::InvalidNumber(raw.clone()))?);
            }
            "--symbols" => {
                i += 1;
                flags.symbols = Some(args.get(i).cloned().unwrap_or_default());
            }
            "-o" | "--output" => {
                // Path is optional
                if i + 1 < args.len() && !args[i + 1].starts_with('-') {
                    i += 1;
                    flags.output = Some(args[i].clone());
                } else {
                    flags.output = Some(".".to_string());
                }
            }
            arg => return Err(Error::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    if flags.clipboard && flags.output.is_some() {
        return Err(Error::ConflictingFlags("--board", "--output"));
    }

    Ok(flags)
}

fn value(args: &[String], i: usize) -> Result<&String> {
    args.get(i)
        .ok_or_else(|| Error::InvalidNumber(format!("missing value for {}", args[i - 1])))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(s: &str) -> Vec<String> {
        std::iter::once("passgen")
            .chain(s.split_whitespace())
            .map(String::from)
            .collect()
    }

    #[test]
    fn parses_generation_flags() {
        let flags = parse(&args("-l 20 -n 3 --no-symbols --seed 9 -q")).unwrap();
        assert_eq!(flags.length.as_deref(), Some("20"));
        assert_eq!(flags.number, Some(3));
        assert_eq!(flags.seed, Some(9));
        assert!(flags.no_symbols && !flags.no_letters && !flags.no_digits);
        assert!(flags.quiet);
    }

    #[test]
    fn length_is_kept_raw() {
        let flags = parse(&args("--length abc")).unwrap();
        assert_eq!(flags.length.as_deref(), Some("abc"));

        let flags = parse(&args("-l")).unwrap();
        assert_eq!(flags.length.as_deref(), Some(""));
    }

    #[test]
    fn output_path_is_optional() {
        assert_eq!(parse(&args("-o")).unwrap().output.as_deref(), Some("."));
        assert_eq!(parse(&args("-o -q")).unwrap().output.as_deref(), Some("."));
        assert_eq!(
            parse(&args("-o out.txt")).unwrap().output.as_deref(),
            Some("out.txt")
        );
    }

    #[test]
    fn rejects_bad_numbers_and_unknown_args() {
        assert!(matches!(parse(&args("-n many")), Err(Error::InvalidNumber(_))));
        assert!(matches!(parse(&args("--seed")), Err(Error::InvalidNumber(_))));
        assert!(matches!(parse(&args("--hex")), Err(Error::UnknownArg(a)) if a == "--hex"));
    }

    #[test]
    fn clipboard_and_file_output_conflict() {
        assert!(matches!(
            parse(&args("-b -o pw.txt")),
            Err(Error::ConflictingFlags("--board", "--output"))
        ));
        assert!(matches!(parse(&args("-o -b")), Err(Error::ConflictingFlags(..))));
        assert!(parse(&args("-b")).is_ok());
    }
}
