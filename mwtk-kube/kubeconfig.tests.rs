use kube::config::Kubeconfig;

use super::*;

#[test]
fn new_encodes_certificate_test() {
    let config = KubeconfigFile::new("default-user", b"CERT", "https://10.0.0.1:6443", "secret");

    assert_eq!("Q0VSVA==", config.clusters[0].cluster.certificate_authority_data);
    assert_eq!("https://10.0.0.1:6443", config.clusters[0].cluster.server);
    assert_eq!("default-user", config.users[0].name);
    assert_eq!("default-user", config.contexts[0].context.user);
    assert_eq!(config.contexts[0].name, config.current_context);
}

#[test]
fn to_yaml_uses_kubeconfig_keys_test() {
    let yaml = KubeconfigFile::new("u", b"c", "https://s", "t").to_yaml().unwrap();

    assert!(yaml.starts_with("apiVersion: v1\n"));
    assert!(!yaml.contains("api-version"));
    assert!(yaml.contains("current-context: default-context"));
    assert!(yaml.contains("certificate-authority-data: Yw=="));
}

#[tokio::test]
async fn write_to_is_readable_by_kube_test() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".kube").join("config");

    KubeconfigFile::new("default-user", b"CERT", "https://10.0.0.1:6443", "secret")
        .write_to(&path)
        .await
        .unwrap();

    let config = Kubeconfig::read_from(&path).unwrap();
    assert_eq!(Some("v1"), config.api_version.as_deref());
    assert_eq!(Some("Config"), config.kind.as_deref());
    assert_eq!(Some("default-context"), config.current_context.as_deref());
    assert_eq!(1, config.clusters.len());
    assert_eq!(1, config.auth_infos.len());
    assert_eq!("default-user", config.auth_infos[0].name);
}
