#[cfg(test)]
mod tests {
    use crate::shell::{confirmed, ShellCommand};
    use crate::ticket::Category;

    #[test]
    fn test_parse_queue_categories() {
        assert_eq!(
            "queue pickup".parse::<ShellCommand>(),
            Ok(ShellCommand::Queue(Category::Pickup))
        );
        assert_eq!(
            "q Prescription".parse::<ShellCommand>(),
            Ok(ShellCommand::Queue(Category::Prescription))
        );
        assert!("queue".parse::<ShellCommand>().is_err());
        assert!("queue lunch".parse::<ShellCommand>().is_err());
    }

    #[test]
    fn test_parse_arguments_keep_inner_spaces() {
        assert_eq!(
            "login  open sesame ".parse::<ShellCommand>(),
            Ok(ShellCommand::Login("open sesame".to_string()))
        );
        assert_eq!(
            "rm A42".parse::<ShellCommand>(),
            Ok(ShellCommand::Remove("A42".to_string()))
        );
    }

    #[test]
    fn test_parse_bare_words() {
        assert_eq!("NEXT".parse::<ShellCommand>(), Ok(ShellCommand::Next));
        assert_eq!("".parse::<ShellCommand>(), Ok(ShellCommand::Show));
        assert_eq!("exit".parse::<ShellCommand>(), Ok(ShellCommand::Quit));
        assert!("dance".parse::<ShellCommand>().is_err());
    }

    #[test]
    fn test_admin_gating() {
        assert!(ShellCommand::Next.requires_admin());
        assert!(ShellCommand::Clear.requires_admin());
        assert!(ShellCommand::Remove("A1".to_string()).requires_admin());
        assert!(!ShellCommand::Queue(Category::Pickup).requires_admin());
        assert!(!ShellCommand::Logout.requires_admin());
    }

    #[test]
    fn test_confirmation() {
        assert!(confirmed("y\n"));
        assert!(confirmed("YES"));
        assert!(!confirmed(""));
        assert!(!confirmed("nope"));
    }
}
