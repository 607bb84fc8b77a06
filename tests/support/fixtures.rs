//! Test fixtures and constants.

/// Stand-in for `aws secretsmanager get-secret-value --secret-id NAME ...`.
///
/// Logs each requested id to `$AWS_ENV_TEST_CALLS` and serves a fixed set
/// of secrets as `--output json` does; `binary` has no `SecretString`, and
/// anything else fails the way the real CLI does.
pub const FAKE_AWS: &str = r#"#!/bin/sh
echo "$4" >> "$AWS_ENV_TEST_CALLS"
case "$4" in
  app/db)
    printf '%s\n' '"{\"user\":\"admin\",\"port\":5432,\"ratio\":0.25,\"tls\":true,\"hosts\":[\"a\",\"b\"],\"extra\":null}"'
    ;;
  token)
    printf '%s\n' '"t0k3n"'
    ;;
  spaced)
    printf '%s\n' '"  padded value  "'
    ;;
  binary)
    printf '%s\n' 'null'
    ;;
  *)
    echo "An error occurred (ResourceNotFoundException) when calling the GetSecretValue operation" >&2
    exit 254
    ;;
esac
"#;

/// Pipe input covering plain values, raw secrets and every coercion.
pub const MIXED_INPUT: &str = "\
HOST=localhost
DB_USER=secretsmanager://app/db##user
DB_PORT=secretsmanager://app/db##port
DB_RATIO=secretsmanager://app/db##ratio
DB_TLS=secretsmanager://app/db##tls
DB_HOSTS=secretsmanager://app/db##hosts
TOKEN=secretsmanager://token
";

/// Expected plain-format output for `MIXED_INPUT`.
pub const MIXED_OUTPUT: &str = "\
HOST=localhost
DB_USER=admin
DB_PORT=5432
DB_RATIO=0.250000
DB_TLS=true
DB_HOSTS=[\"a\",\"b\"]
TOKEN=t0k3n
";
