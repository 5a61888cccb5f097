mod app;
mod cache;
mod catalog;
mod infra;
mod review;
mod ui;

use app::controller::ReviewController;
use infra::config::AppConfig;

#[derive(Debug)]
struct CliArgs {
    target_dir: String,
    dataset_name: String,
    images_per_page: Option<usize>,
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let cli = match parse_args(&args) {
        Ok(cli) => cli,
        Err(error) => {
            eprintln!("{error}");
            print_usage();
            std::process::exit(2);
        }
    };

    let mut config = AppConfig::default();
    if let Some(images_per_page) = cli.images_per_page {
        config.images_per_page = images_per_page;
    }

    let controller =
        match ReviewController::bootstrap(&config, &cli.target_dir, &cli.dataset_name) {
            Ok(controller) => controller,
            Err(error) => {
                eprintln!("failed to bootstrap img-sift: {error}");
                std::process::exit(1);
            }
        };

    if let Err(error) = ui::app_shell::launch(controller, &config) {
        eprintln!("{error}");
        std::process::exit(1);
    }
}

fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    let mut target_dir = None;
    let mut dataset_name = None;
    let mut images_per_page = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--dataset-name" => {
                let value = iter
                    .next()
                    .ok_or_else(|| "missing value for --dataset-name".to_string())?;
                dataset_name = Some(value.clone());
            }
            "--images-per-page" => {
                let value = iter
                    .next()
                    .ok_or_else(|| "missing value for --images-per-page".to_string())?;
                let parsed: usize = value
                    .parse()
                    .map_err(|_| format!("invalid --images-per-page value: {value}"))?;
                if parsed == 0 {
                    return Err("--images-per-page must be at least 1".to_string());
                }
                images_per_page = Some(parsed);
            }
            other if other.starts_with("--") => {
                return Err(format!("unknown flag: {other}"));
            }
            other => {
                if target_dir.is_some() {
                    return Err(format!("unexpected extra argument: {other}"));
                }
                target_dir = Some(other.to_string());
            }
        }
    }

    Ok(CliArgs {
        target_dir: target_dir.ok_or_else(|| "missing target image directory".to_string())?,
        dataset_name: dataset_name
            .ok_or_else(|| "missing required flag --dataset-name".to_string())?,
        images_per_page,
    })
}

fn print_usage() {
    println!("usage:");
    println!("  img-sift <target_dir> --dataset-name <name> [--images-per-page <n>]");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_args(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|part| part.to_string()).collect()
    }

    #[test]
    fn parses_directory_and_dataset_name_in_any_order() {
        let cli = parse_args(&to_args(&["--dataset-name", "cats", "./photos"]))
            .expect("args should parse");
        assert_eq!(cli.target_dir, "./photos");
        assert_eq!(cli.dataset_name, "cats");
        assert!(cli.images_per_page.is_none());

        let cli = parse_args(&to_args(&["./photos", "--dataset-name", "cats"]))
            .expect("args should parse");
        assert_eq!(cli.target_dir, "./photos");
    }

    #[test]
    fn page_size_override_is_validated() {
        let cli = parse_args(&to_args(&[
            "./photos",
            "--dataset-name",
            "cats",
            "--images-per-page",
            "16",
        ]))
        .expect("args should parse");
        assert_eq!(cli.images_per_page, Some(16));

        let error = parse_args(&to_args(&[
            "./photos",
            "--dataset-name",
            "cats",
            "--images-per-page",
            "0",
        ]))
        .expect_err("zero page size should be rejected");
        assert!(error.contains("at least 1"));
    }

    #[test]
    fn missing_required_pieces_are_reported() {
        let error = parse_args(&to_args(&["--dataset-name", "cats"]))
            .expect_err("missing directory should be rejected");
        assert!(error.contains("target image directory"));

        let error = parse_args(&to_args(&["./photos"]))
            .expect_err("missing dataset name should be rejected");
        assert!(error.contains("--dataset-name"));

        let error = parse_args(&to_args(&["./photos", "--dataset-name"]))
            .expect_err("dangling flag should be rejected");
        assert!(error.contains("missing value"));
    }

    #[test]
    fn unknown_flags_and_extra_positionals_are_rejected() {
        let error = parse_args(&to_args(&["./photos", "--dataset-name", "cats", "--verbose"]))
            .expect_err("unknown flag should be rejected");
        assert!(error.contains("unknown flag"));

        let error = parse_args(&to_args(&["./photos", "extra", "--dataset-name", "cats"]))
            .expect_err("extra positional should be rejected");
        assert!(error.contains("unexpected extra argument"));
    }
}
