/// Skip a test if the S3 backend is not configured.
#[macro_export]
macro_rules! skip_without_s3 {
    () => {
        for var in [
            "S3_BUCKET_REGION",
            "S3_BUCKET_NAME",
            "AWS_ACCESS_KEY_ID",
            "AWS_SECRET_ACCESS_KEY",
        ] {
            if std::env::var(var).map(|v| v.is_empty()).unwrap_or(true) {
                eprintln!("SKIPPED: {} not set", var);
                return;
            }
        }
    };
}

/// Skip a test if GCS is not configured or gcloud is not authenticated.
#[macro_export]
macro_rules! skip_without_gcs {
    () => {
        if std::process::Command::new("gcloud")
            .args(["auth", "print-access-token"])
            .output()
            .map(|o| !o.status.success())
            .unwrap_or(true)
        {
            eprintln!("SKIPPED: gcloud not authenticated");
            return;
        }
        for var in ["GCS_BUCKET_NAME", "GCS_PROJECT_ID"] {
            if std::env::var(var).map(|v| v.is_empty()).unwrap_or(true) {
                eprintln!("SKIPPED: {} not set", var);
                return;
            }
        }
    };
}
