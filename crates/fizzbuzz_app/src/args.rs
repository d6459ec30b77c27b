use fizzbuzz_core::FizzBuzzParams;

/// What the binary was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Compute a sequence and record the parameter use.
    Generate(FizzBuzzParams),
    /// Print the most used parameter set.
    MostUsed,
}

/// Parses the positional arguments `<int1> <int2> <limit> <str1> <str2>`,
/// or the `most-used` subcommand.
pub fn parse(args: &[String]) -> Result<Command, String> {
    if args.first().map(String::as_str) == Some("most-used") {
        return Ok(Command::MostUsed);
    }

    let int1 = int_param(args, 0, "int1")?;
    let int2 = int_param(args, 1, "int2")?;
    let limit = int_param(args, 2, "limit")?;
    let str1 = string_param(args, 3, "str1")?;
    let str2 = string_param(args, 4, "str2")?;

    Ok(Command::Generate(FizzBuzzParams::new(
        int1, int2, limit, str1, str2,
    )))
}

fn string_param(args: &[String], index: usize, name: &str) -> Result<String, String> {
    match args.get(index) {
        Some(value) => Ok(value.clone()),
        None => Err(format!("{name} is mandatory.")),
    }
}

fn int_param(args: &[String], index: usize, name: &str) -> Result<i64, String> {
    string_param(args, index, name)?
        .parse()
        .map_err(|_| format!("{name} must be an integer."))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(raw: &str) -> Vec<String> {
        raw.split_whitespace().map(ToOwned::to_owned).collect()
    }

    #[test]
    fn five_positionals_become_params() {
        let command = parse(&argv("3 7 16 fizz buzz")).unwrap();
        assert_eq!(
            command,
            Command::Generate(FizzBuzzParams::new(3, 7, 16, "fizz", "buzz"))
        );
    }

    #[test]
    fn most_used_subcommand_is_recognized() {
        assert_eq!(parse(&argv("most-used")).unwrap(), Command::MostUsed);
    }

    #[test]
    fn missing_argument_names_the_parameter() {
        assert_eq!(parse(&argv("3 7 16 fizz")), Err("str2 is mandatory.".into()));
        assert_eq!(parse(&[]), Err("int1 is mandatory.".into()));
    }

    #[test]
    fn non_numeric_argument_names_the_parameter() {
        assert_eq!(
            parse(&argv("atchoum 8 10 fizz buzz")),
            Err("int1 must be an integer.".into())
        );
    }
}
