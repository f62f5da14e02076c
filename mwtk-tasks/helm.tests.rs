use rstest::rstest;

use crate::testing::FakeHelm;

use super::*;

#[rstest]
#[case("shop", None, "shop")]
#[case("shop", Some(""), "shop")]
#[case("shop", Some("staging"), "shop-staging")]
fn release_name_test(#[case] app: &str, #[case] env: Option<&str>, #[case] expected: &str) {
    assert_eq!(expected, HelmAppsManager::<FakeHelm>::release_name(app, env));
}

#[tokio::test]
async fn install_args_test() {
    let helm = FakeHelm::default();
    let manager = HelmAppsManager::new(&helm);

    let release = manager
        .install("shop", "repo/shop", Some("prod"), "apps", Some(Path::new("values.yaml")))
        .await
        .unwrap();

    assert_eq!("shop-prod", release);
    assert_eq!(
        vec![
            "upgrade",
            "--install",
            "shop-prod",
            "repo/shop",
            "--namespace",
            "apps",
            "--create-namespace",
            "--values",
            "values.yaml"
        ],
        helm.calls()[0]
    );
}

fn environments() -> Vec<String> {
    vec!["staging".to_owned(), "prod".to_owned()]
}

#[tokio::test]
async fn find_releases_without_env_test() {
    let helm = FakeHelm::default().responding("list", "shop\nshop-staging\nshopping\nblog-shop\n\n");
    let manager = HelmAppsManager::new(&helm);

    let releases = manager.find_releases("shop", None, &environments(), "apps").await.unwrap();

    assert_eq!(vec!["shop".to_owned(), "shop-staging".to_owned()], releases);
    assert_eq!(vec!["list", "--short", "--namespace", "apps"], helm.calls()[0]);
}

#[tokio::test]
async fn find_releases_skips_other_apps_sharing_prefix_test() {
    let helm = FakeHelm::default().responding("list", "shop\nshop-api\nshop-api-prod\nshop-prod\nshop-\n");
    let manager = HelmAppsManager::new(&helm);

    let releases = manager.find_releases("shop", None, &environments(), "apps").await.unwrap();

    assert_eq!(vec!["shop".to_owned(), "shop-prod".to_owned()], releases);
}

#[tokio::test]
async fn find_releases_with_env_test() {
    let helm = FakeHelm::default().responding("list", "shop\nshop-staging\nshop-prod\n");
    let manager = HelmAppsManager::new(&helm);

    let releases = manager.find_releases("shop", Some("prod"), &environments(), "apps").await.unwrap();

    assert_eq!(vec!["shop-prod".to_owned()], releases);
}

#[tokio::test]
async fn find_releases_with_unlisted_env_test() {
    let helm = FakeHelm::default().responding("list", "shop-api\nshop-qa\n");
    let manager = HelmAppsManager::new(&helm);

    let releases = manager.find_releases("shop", Some("qa"), &environments(), "apps").await.unwrap();

    assert_eq!(vec!["shop-qa".to_owned()], releases);
}

#[tokio::test]
async fn failed_helm_is_reported_test() {
    let helm = FakeHelm::default().failing("list", 1, "Kubernetes cluster unreachable");
    let manager = HelmAppsManager::new(&helm);

    let error = manager.list_releases("apps").await.unwrap_err();

    assert_eq!("helm exited with code 1: Kubernetes cluster unreachable", error.to_string());
}
