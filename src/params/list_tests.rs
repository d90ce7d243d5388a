//! Tests for parameter list lookups.

use std::ffi::OsString;

use super::{ParamList, check_parm, find, init_startup, startup};

fn list(args: &[&str]) -> ParamList {
    ParamList::from_args(args.iter().copied())
}

mod lookup {
    use super::*;

    #[test]
    fn find_ignores_case() {
        let params = list(&["-record", "foo"]);
        assert_eq!(find(&params, "-RECORD"), Some(0));
    }

    #[test]
    fn find_in_empty_list_is_none() {
        assert_eq!(find(&ParamList::new(), "-x"), None);
    }

    #[test]
    fn find_returns_first_match() {
        let params = list(&["-warp", "1", "-WARP", "2"]);
        assert_eq!(params.find("-warp"), Some(0));
    }

    #[test]
    fn find_does_not_match_prefixes() {
        let params = list(&["-recordfromto"]);
        assert_eq!(params.find("-record"), None);
        assert_eq!(params.find("-recordfromtoo"), None);
    }

    #[test]
    fn contains_matches_find() {
        let params = list(&["-nomonsters"]);
        assert!(params.contains("-NoMonsters"));
        assert!(!params.contains("-fast"));
    }
}

mod arguments {
    use super::*;

    #[test]
    fn find_with_args_requires_trailing_tokens() {
        let params = list(&["-warp", "1", "2"]);
        assert_eq!(params.find_with_args("-warp", 2), Some(0));
        assert_eq!(params.find_with_args("-warp", 3), None);
    }

    #[test]
    fn value_of_returns_next_token() {
        let params = list(&["-skill", "4", "-fast"]);
        assert_eq!(params.value_of("-skill"), Some("4"));
        assert_eq!(params.value_of("-fast"), None);
        assert_eq!(params.value_of("-missing"), None);
    }

    #[test]
    fn args_after_stops_at_next_parameter() {
        let params = list(&["-file", "a.wad", "b.wad", "-deh", "c.deh"]);
        assert_eq!(params.args_after("-file"), ["a.wad", "b.wad"]);
        assert_eq!(params.args_after("-deh"), ["c.deh"]);
        assert!(params.args_after("-nope").is_empty());
    }

    #[test]
    fn args_after_trailing_parameter_is_empty() {
        let params = list(&["-file"]);
        assert!(params.args_after("-file").is_empty());
    }
}

mod construction {
    use super::*;

    #[test]
    fn from_command_line_tokenizes() {
        let params = ParamList::from_command_line("doom.exe -file \"my wad.wad\"");
        assert_eq!(params.as_slice(), ["doom.exe", "-file", "my wad.wad"]);
    }

    #[test]
    fn push_preserves_order() {
        let mut params = ParamList::new();
        params.push("a");
        params.push(String::from("b"));
        assert_eq!(params.iter().collect::<Vec<_>>(), ["a", "b"]);
        assert_eq!(params.get(1), Some("b"));
        assert_eq!(params.get(2), None);
    }

    #[test]
    fn collects_from_strings() {
        let params: ParamList = vec![String::from("-v")].into_iter().collect();
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn os_args_that_are_valid_utf8_are_kept() {
        let params = ParamList::from_os_args([OsString::from("doom"), OsString::from("-Warp")]);
        assert_eq!(params.as_slice(), ["doom", "-Warp"]);
    }

    #[cfg(unix)]
    #[test]
    fn invalid_utf8_os_args_are_converted_lossily() {
        use std::os::unix::ffi::OsStringExt;

        let args = [
            OsString::from("doom"),
            OsString::from_vec(vec![0xff, 0xfe]),
            OsString::from_vec(b"e1m\xff1".to_vec()),
            OsString::from("-record"),
        ];
        let params = ParamList::from_os_args(args);

        assert_eq!(params.len(), 4);
        assert_eq!(params.get(1), Some("\u{fffd}\u{fffd}"));
        assert_eq!(params.get(2), Some("e1m\u{fffd}1"));
        assert_eq!(params.find("-record"), Some(3));
    }
}

mod process_wide {
    use super::*;

    // The startup list is a process-wide singleton, so this is the only test
    // that installs it.
    #[test]
    fn startup_list_is_installed_once() {
        let first = init_startup(list(&["doom", "-Record", "demo1"]));
        assert!(first.is_ok());

        let second = init_startup(list(&["other"]));
        assert_eq!(second, Err(list(&["other"])));

        assert_eq!(startup().map(ParamList::len), Some(3));
        assert_eq!(check_parm("-record"), Some(1));
        assert_eq!(check_parm("-playdemo"), None);
    }
}
