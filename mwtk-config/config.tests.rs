use super::*;

#[test]
fn partial_yaml_uses_defaults_test() {
    let config = serde_yaml::from_str::<Config>("namespace: apps\ndeletion:\n  stop_on_decline: true\n").unwrap();

    assert_eq!("apps", config.namespace);
    assert_eq!(DEFAULT_MANAGED_BY, config.managed_by);
    assert_eq!("helm", config.helm.binary);
    assert_eq!(vec!["dev", "test", "staging", "prod"], config.helm.environments);
    assert!(config.deletion.stop_on_decline);
    assert_eq!(None, config.deletion.propagation_policy);
    assert_eq!(None, config.kube_config);
}

#[test]
fn propagation_policy_from_yaml_test() {
    let config = serde_yaml::from_str::<Config>("deletion:\n  propagation_policy: Foreground\n").unwrap();
    assert_eq!(Some(PropagationPolicy::Foreground), config.deletion.propagation_policy);

    let yaml = serde_yaml::to_string(&config).unwrap();
    assert!(yaml.contains("propagation_policy: Foreground"));

    assert!(serde_yaml::from_str::<Config>("deletion:\n  propagation_policy: Cascade\n").is_err());
}

#[test]
fn kube_config_path_test() {
    let mut config = Config::default();
    assert_eq!(PathBuf::from("/tmp/cli"), config.kube_config_path(Some("/tmp/cli")));

    config.kube_config = Some("/tmp/file".to_owned());
    assert_eq!(PathBuf::from("/tmp/cli"), config.kube_config_path(Some("/tmp/cli")));
    assert_eq!(PathBuf::from("/tmp/file"), config.kube_config_path(None));
}

#[tokio::test]
async fn load_or_create_writes_defaults_test() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.yaml");

    let config = load_or_create_default::<Config>(&path).await.unwrap();

    assert_eq!(Config::default(), config);
    assert!(path.exists());
    assert_eq!(config, Config::load(&path).await.unwrap());
}

#[tokio::test]
async fn load_or_create_keeps_malformed_file_test() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "namespace: [unclosed").unwrap();

    let config = load_or_create_default::<Config>(&path).await.unwrap();

    assert_eq!(Config::default(), config);
    assert_eq!("namespace: [unclosed", std::fs::read_to_string(&path).unwrap());
}

#[tokio::test]
async fn load_or_create_keeps_unreadable_file_test() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    let content = [0x6e, 0x73, 0x3a, 0x20, 0xff, 0xfe, 0x0a];
    std::fs::write(&path, content).unwrap();

    let config = load_or_create_default::<Config>(&path).await.unwrap();

    assert_eq!(Config::default(), config);
    assert_eq!(content.to_vec(), std::fs::read(&path).unwrap());
}
