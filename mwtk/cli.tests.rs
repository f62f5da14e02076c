use clap::CommandFactory;

use super::*;

#[test]
fn verify_cli_test() {
    Args::command().debug_assert();
}

#[test]
fn super_user_delete_test() {
    let args = Args::parse_from([
        "mwtk",
        "super-user:delete",
        "ops",
        "--namespace",
        "apps",
        "--force",
        "-n",
    ]);

    assert!(args.no_interaction);
    let Command::SuperUserDelete(delete) = args.command else {
        panic!("expected super-user:delete");
    };
    assert_eq!("ops", delete.service_account);
    assert_eq!(Some("apps"), delete.namespace.namespace.as_deref());
    assert!(delete.force);
    assert!(!delete.yes);
    assert!(!delete.stop_on_decline);
}

#[test]
fn namespace_falls_back_to_config_test() {
    let mut config = Config::default();
    config.namespace = "from-config".to_owned();

    assert_eq!("from-config", NamespaceArg::default().resolve(&config));
    let arg = NamespaceArg {
        namespace: Some("apps".to_owned()),
    };
    assert_eq!("apps", arg.resolve(&config));
}

#[test]
fn config_create_defaults_test() {
    let args = Args::parse_from(["mwtk", "config:create"]);
    let Command::ConfigCreate(create) = args.command else {
        panic!("expected config:create");
    };

    assert_eq!(PathBuf::from("./ca.crt"), create.certificate);
    assert!(!create.force);
}

#[test]
fn app_uninstall_test() {
    let args = Args::parse_from(["mwtk", "app:uninstall", "shop", "--env", "staging"]);
    let Command::AppUninstall(uninstall) = args.command else {
        panic!("expected app:uninstall");
    };

    assert_eq!("shop", uninstall.app);
    assert_eq!(Some("staging"), uninstall.env.as_deref());
    assert_eq!(None, uninstall.namespace.namespace);
}
