/// Tests for describe/hash option rendering
#[cfg(test)]
mod tests {
    use crate::options::{DescribeOptions, HashFormat};

    #[test]
    fn test_default_hash_format_is_short() {
        assert_eq!(HashFormat::default(), HashFormat::Short);
    }

    #[test]
    fn test_default_describe_flags() {
        let args = DescribeOptions::default().to_args();
        assert_eq!(args, vec!["describe", "--always", "--dirty=-dev", "--broken"]);
    }

    #[test]
    fn test_custom_dirty_mark() {
        let options = DescribeOptions { dirty_mark: Some("-wip".to_string()), ..Default::default() };
        assert!(options.to_args().contains(&"--dirty=-wip".to_string()));
    }

    #[test]
    fn test_no_dirty_mark_omits_dirty_and_broken() {
        // --broken implies git's dirty check, so it must go too.
        let options = DescribeOptions { dirty_mark: None, ..Default::default() };
        assert_eq!(options.to_args(), vec!["describe", "--always"]);
    }

    #[test]
    fn test_dirty_mark_without_broken() {
        let options = DescribeOptions { broken: false, ..Default::default() };
        assert_eq!(options.to_args(), vec!["describe", "--always", "--dirty=-dev"]);
    }

    #[test]
    fn test_bare_describe() {
        let options = DescribeOptions { always: false, dirty_mark: None, broken: false };
        assert_eq!(options.to_args(), vec!["describe"]);
    }
}
