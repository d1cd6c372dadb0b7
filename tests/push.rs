// ABOUTME: Tests for push-only mode.
// ABOUTME: Verifies the exact tag, login, push, remove sequence and that nothing is pulled.

mod support;

use docker_mirror::mirror::{self, MirrorErrorKind, MirrorMode, Step};
use support::{Call, ScriptedRuntime, config_with, image};

#[tokio::test]
async fn nginx_push_sequence_is_exact() {
    let runtime = ScriptedRuntime::new().with_local("nginx");
    let config = config_with("reg.example.com", &["docker.m.daocloud.io"]);

    let report = mirror::push_image(config, image("nginx"), &runtime)
        .await
        .unwrap();

    assert_eq!(
        runtime.calls(),
        vec![
            Call::Tag("nginx".into(), "reg.example.com/public/nginx".into()),
            Call::Login {
                registry: "reg.example.com".into(),
                username: "admin".into(),
            },
            Call::Push("reg.example.com/public/nginx".into()),
            Call::Remove("reg.example.com/public/nginx".into()),
        ]
    );
    assert!(report.source.is_none());
    assert!(report.attempts.is_empty());
    assert_eq!(
        report.pushed_to.unwrap().to_string(),
        "reg.example.com/public/nginx"
    );
    assert_eq!(runtime.local_images(), vec!["nginx".to_string()]);
}

#[tokio::test]
async fn push_never_pulls() {
    let runtime = ScriptedRuntime::new()
        .with_local("bitnami/redis:7")
        .with_remote("docker.m.daocloud.io/bitnami/redis:7");
    let config = config_with("reg.example.com", &["docker.m.daocloud.io"]);

    mirror::run(MirrorMode::PushOnly, config, image("bitnami/redis:7"), &runtime)
        .await
        .unwrap();

    assert!(runtime.pulls().is_empty());
    assert_eq!(
        runtime.pushes(),
        vec!["reg.example.com/public/redis:7".to_string()]
    );
}

#[tokio::test]
async fn custom_project_is_used_for_target() {
    let runtime = ScriptedRuntime::new().with_local("nginx:1.25");
    let mut config = config_with("reg.example.com", &[]);
    config.harbor.project = "infra".to_string();

    mirror::push_image(config, image("nginx:1.25"), &runtime)
        .await
        .unwrap();

    assert_eq!(
        runtime.pushes(),
        vec!["reg.example.com/infra/nginx:1.25".to_string()]
    );
}

#[tokio::test]
async fn missing_local_image_fails_at_tag() {
    let runtime = ScriptedRuntime::new();
    let config = config_with("reg.example.com", &[]);

    let err = mirror::push_image(config, image("nginx"), &runtime)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), MirrorErrorKind::RuntimeOperation);
    assert_eq!(err.step(), Some(Step::Tag));
    assert!(err.to_string().contains("No such image: nginx"));
    assert_eq!(runtime.calls().len(), 1);
}

#[tokio::test]
async fn login_failure_is_fatal() {
    let runtime = ScriptedRuntime::new().with_local("nginx").failing_login();
    let config = config_with("reg.example.com", &[]);

    let err = mirror::push_image(config, image("nginx"), &runtime)
        .await
        .unwrap_err();

    assert_eq!(err.step(), Some(Step::Login));
    assert!(err.to_string().contains("incorrect username or password"));
    assert!(runtime.pushes().is_empty());
}

#[tokio::test]
async fn final_remove_failure_is_fatal() {
    let runtime = ScriptedRuntime::new().with_local("nginx").failing_remove();
    let config = config_with("reg.example.com", &[]);

    let err = mirror::push_image(config, image("nginx"), &runtime)
        .await
        .unwrap_err();

    assert_eq!(err.step(), Some(Step::Remove));
    // The push itself went through before cleanup failed.
    assert!(runtime.has_remote("reg.example.com/public/nginx"));
}
