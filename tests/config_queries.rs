// tests/config_queries.rs
use hr_post_generator::config::{load_queries_default, load_queries_from};
use std::{env, fs};

#[test]
fn parse_toml_and_json_paths() {
    let dir = tempfile::tempdir().unwrap();

    let p_toml = dir.path().join("queries.toml");
    fs::write(
        &p_toml,
        r#"
queries = [" AI Agent 採用 ", "", "採用AI 最新"]
"#,
    )
    .unwrap();
    let v = load_queries_from(&p_toml).unwrap();
    // Trimmed, empties dropped, order preserved.
    assert_eq!(
        v,
        vec!["AI Agent 採用".to_string(), "採用AI 最新".to_string()]
    );

    let p_json = dir.path().join("queries.json");
    fs::write(&p_json, r#"["AIエージェント 人事"," 採用DX  ", ""]"#).unwrap();
    let vj = load_queries_from(&p_json).unwrap();
    assert_eq!(
        vj,
        vec!["AIエージェント 人事".to_string(), "採用DX".to_string()]
    );
}

#[test]
fn explicitly_empty_query_list_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let p = dir.path().join("queries.toml");
    fs::write(&p, "queries = []").unwrap();
    assert!(load_queries_from(&p).is_err());

    let p2 = dir.path().join("blank.toml");
    fs::write(&p2, r#"queries = ["", "  "]"#).unwrap();
    assert!(load_queries_from(&p2).is_err());
}

#[serial_test::serial]
#[test]
fn default_uses_env_then_fallbacks_then_builtins() {
    // Isolate CWD so the test never reads the real repo config/.
    let old = env::current_dir().unwrap();
    let tmp = tempfile::tempdir().unwrap();
    env::set_current_dir(tmp.path()).unwrap();

    env::remove_var("SEARCH_QUERIES_PATH");

    // 1) Nothing on disk → built-in defaults.
    let v = load_queries_default().unwrap();
    assert_eq!(v.len(), 3);
    assert_eq!(v[0], "AI Agent 採用 人材 2025");

    // 2) Fallback TOML in ./config/
    let cfg_dir = tmp.path().join("config");
    fs::create_dir_all(&cfg_dir).unwrap();
    let p_toml = cfg_dir.join("queries.toml");
    fs::write(&p_toml, r#"queries = ["from-file"]"#).unwrap();
    let vt = load_queries_default().unwrap();
    assert_eq!(vt, vec!["from-file".to_string()]);

    // 3) Env path wins over the fallback.
    let p_env = tmp.path().join("queries.json");
    fs::write(&p_env, r#"["from-env"]"#).unwrap();
    env::set_var("SEARCH_QUERIES_PATH", p_env.display().to_string());
    let ve = load_queries_default().unwrap();
    assert_eq!(ve, vec!["from-env".to_string()]);

    // 4) Env path to nowhere is an error, not a silent fallback.
    env::set_var("SEARCH_QUERIES_PATH", tmp.path().join("missing.toml"));
    assert!(load_queries_default().is_err());

    env::remove_var("SEARCH_QUERIES_PATH");
    env::set_current_dir(&old).unwrap();
}
