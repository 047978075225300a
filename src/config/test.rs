#[cfg(test)]
mod tests {
    use crate::config::{Args, DEFAULT_ADMIN_PASSWORD, DEFAULT_PORT, DEFAULT_STATIC_DIR};
    use clap::{CommandFactory, Parser};
    use std::path::PathBuf;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["queueboard"]).unwrap();

        assert_eq!(args.port, DEFAULT_PORT);
        assert_eq!(args.bind_addr().to_string(), "0.0.0.0:5000");
        assert_eq!(args.static_dir, PathBuf::from(DEFAULT_STATIC_DIR));
        assert!(!args.verbose);
        assert!(args.admin_secret().matches(DEFAULT_ADMIN_PASSWORD));
    }

    #[test]
    fn test_overrides() {
        let args = Args::try_parse_from([
            "queueboard",
            "--host",
            "127.0.0.1",
            "-p",
            "8081",
            "--admin-password",
            "s3cret",
            "--static-dir",
            "/srv/board",
            "-v",
        ])
        .unwrap();

        assert_eq!(args.bind_addr().to_string(), "127.0.0.1:8081");
        assert!(args.admin_secret().matches("s3cret"));
        assert!(!args.admin_secret().matches(DEFAULT_ADMIN_PASSWORD));
        assert_eq!(args.static_dir, PathBuf::from("/srv/board"));
        assert!(args.verbose);
    }

    #[test]
    fn test_rejects_bad_port() {
        assert!(Args::try_parse_from(["queueboard", "--port", "70000"]).is_err());
    }

    #[test]
    fn test_every_flag_has_help_text() {
        let help = Args::command().render_help().to_string();

        assert!(help.contains("Shared secret"));
        assert!(help.contains("Port to listen on"));
        assert!(!help.contains(DEFAULT_ADMIN_PASSWORD));
    }
}
