//! Tests for command-line interface parsing and file processing

#[cfg(test)]
mod tests {
    use clap::Parser;
    use image::{Rgb, RgbImage};
    use imagescatter::ScatterError;
    use imagescatter::io::cli::{Cli, FileProcessor};
    use imagescatter::io::configuration::{
        DEFAULT_BALANCE_WINDOW, DEFAULT_FLOW_AMOUNT, DEFAULT_MARKER_COUNT, DEFAULT_SEED,
        DEFAULT_STEP_SIZE,
    };
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn temp_dir() -> TempDir {
        let Ok(dir) = TempDir::new() else {
            unreachable!("temporary directory is available");
        };
        dir
    }

    fn write_reference(path: &Path) {
        let image = RgbImage::from_fn(32, 32, |x, y| {
            Rgb([
                u8::try_from(x * 8).unwrap_or(u8::MAX),
                u8::try_from(y * 8).unwrap_or(u8::MAX),
                128,
            ])
        });
        assert!(image.save(path).is_ok());
    }

    // Tests CLI parsing with only required target file argument
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["program", "test.png"]);

        assert_eq!(cli.target, PathBuf::from("test.png"));
        assert_eq!(cli.seed, DEFAULT_SEED);
        assert_eq!(cli.markers, DEFAULT_MARKER_COUNT);
        assert_eq!(cli.step_size, DEFAULT_STEP_SIZE);
        assert_eq!(cli.balance_window, DEFAULT_BALANCE_WINDOW);
        assert!((cli.flow - DEFAULT_FLOW_AMOUNT).abs() < f32::EPSILON);
        assert!(!cli.cycle_scale);
        assert!(!cli.path);
        assert!(!cli.visualize);
        assert!(!cli.quiet);
    }

    // Tests short flags and their mapping onto the walk configuration
    // Verified by swapping flow and randomness in scatter_config
    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from([
            "program", "test.png", "-s", "7", "-n", "25", "-f", "0.002", "-r", "1.5", "-k", "6",
            "-c",
        ]);
        let config = cli.scatter_config();

        assert_eq!(config.seed, 7);
        assert_eq!(config.marker_count, 25);
        assert!((config.flow_amount - 0.002).abs() < f32::EPSILON);
        assert!((config.randomness - 1.5).abs() < f32::EPSILON);
        assert_eq!(config.balance_window, 6);
        assert!(config.cycle_scale);
    }

    // Tests negative start coordinates and elevation reach the configuration
    // Verified by dropping allow_hyphen_values
    #[test]
    fn test_cli_start_position() {
        let cli = Cli::parse_from([
            "program",
            "test.png",
            "--start-x",
            "-3.5",
            "--start-z",
            "4",
            "--elevation",
            "-1",
        ]);
        let config = cli.scatter_config();

        assert!((config.starting_position.x + 3.5).abs() < f32::EPSILON);
        assert!((config.starting_position.z - 4.0).abs() < f32::EPSILON);
        assert!((config.starting_position.y + 1.0).abs() < f32::EPSILON);
        assert!((config.elevation + 1.0).abs() < f32::EPSILON);
    }

    // Tests file skip and progress behavior follow their flags
    // Verified by inverting the boolean logic
    #[test]
    fn test_skip_and_progress_flags() {
        let cli = Cli::parse_from(["program", "test.png"]);
        assert!(cli.skip_existing());
        assert!(cli.should_show_progress());

        let cli = Cli::parse_from(["program", "test.png", "--no-skip", "--quiet"]);
        assert!(!cli.skip_existing());
        assert!(!cli.should_show_progress());
    }

    // Tests output names are derived next to the input
    // Verified by dropping the parent directory
    #[test]
    fn test_output_paths() {
        let input = Path::new("images/forest.png");
        assert_eq!(
            FileProcessor::get_output_path(input),
            PathBuf::from("images/forest_scatter.png")
        );
        assert_eq!(
            FileProcessor::get_visualization_path(input),
            PathBuf::from("images/forest_scatter.gif")
        );
    }

    // Tests directory targets skip previews, other files and finished inputs
    // Verified by collecting every PNG in the directory
    #[test]
    fn test_collect_files() {
        let dir = temp_dir();
        write_reference(&dir.path().join("b.png"));
        write_reference(&dir.path().join("a.png"));
        write_reference(&dir.path().join("b_scatter.png"));
        assert!(std::fs::write(dir.path().join("notes.txt"), "notes").is_ok());

        let target = dir.path().to_string_lossy().to_string();
        let cli = Cli::parse_from(["program", target.as_str(), "--quiet"]);
        let processor = FileProcessor::new(cli);
        let Ok(files) = processor.collect_files() else {
            unreachable!("directory is readable");
        };
        assert_eq!(files, vec![dir.path().join("a.png")]);

        let cli = Cli::parse_from(["program", target.as_str(), "--quiet", "--no-skip"]);
        let processor = FileProcessor::new(cli);
        let Ok(files) = processor.collect_files() else {
            unreachable!("directory is readable");
        };
        assert_eq!(files, vec![dir.path().join("a.png"), dir.path().join("b.png")]);
    }

    // Tests unusable targets are reported
    // Verified by treating every file as a PNG
    #[test]
    fn test_invalid_targets() {
        let dir = temp_dir();
        let text = dir.path().join("notes.txt");
        assert!(std::fs::write(&text, "notes").is_ok());

        for target in [text, dir.path().join("missing")] {
            let target = target.to_string_lossy().to_string();
            let cli = Cli::parse_from(["program", target.as_str(), "--quiet"]);
            let result = FileProcessor::new(cli).collect_files();
            assert!(matches!(
                result,
                Err(ScatterError::InvalidParameter { ref value, .. }) if *value == target
            ));
        }
    }

    // Tests a single file run writes the preview and the animation
    // Verified by skipping the export step
    #[test]
    fn test_process_single_file() {
        let dir = temp_dir();
        let input = dir.path().join("ref.png");
        write_reference(&input);

        let target = input.to_string_lossy().to_string();
        let cli = Cli::parse_from([
            "program",
            target.as_str(),
            "-n",
            "60",
            "-p",
            "-v",
            "--quiet",
        ]);
        assert!(FileProcessor::new(cli).process().is_ok());

        let preview = FileProcessor::get_output_path(&input);
        assert!(preview.exists());
        assert!(FileProcessor::get_visualization_path(&input).exists());

        let Ok(rendered) = image::open(&preview) else {
            unreachable!("preview is a valid PNG");
        };
        assert_eq!((rendered.width(), rendered.height()), (32, 32));
    }

    // Tests an invalid configuration aborts before writing output
    // Verified by exporting before validation
    #[test]
    fn test_process_invalid_configuration() {
        let dir = temp_dir();
        let input = dir.path().join("ref.png");
        write_reference(&input);

        let target = input.to_string_lossy().to_string();
        let cli = Cli::parse_from(["program", target.as_str(), "--start-x", "100", "--quiet"]);
        assert!(FileProcessor::new(cli).process().is_err());
        assert!(!FileProcessor::get_output_path(&input).exists());
    }
}
