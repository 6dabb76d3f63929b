//! kmskit CLI - Build and inspect KMS wire payloads offline.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kmskit_model::*;
use kmskit_protocol::{decode_response, encode_request, endpoint_for_region, ProtocolError};

// ============================================================================
// CLI Structure
// ============================================================================

#[derive(Parser)]
#[command(name = "kmskit")]
#[command(about = "kmskit - Build and inspect KMS wire payloads")]
#[command(version)]
struct Cli {
    /// Region used to resolve the service endpoint
    #[arg(long, default_value = "us-east-1", env = "KMSKIT_REGION")]
    region: String,

    /// Explicit endpoint, overrides region resolution
    #[arg(long, env = "KMSKIT_ENDPOINT")]
    endpoint: Option<String>,

    /// Print JSON on a single line
    #[arg(long)]
    compact: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every operation with its target and documented errors
    Operations,
    /// Encode a request JSON document into its wire form
    Encode {
        /// Operation name (e.g. Encrypt) or target (TrentService.Encrypt)
        #[arg(value_parser = parse_operation)]
        operation: Operation,
        /// Request JSON file (stdin if omitted)
        #[arg(long)]
        input: Option<PathBuf>,
    },
    /// Decode a response body into a result or service exception
    Decode {
        /// Operation name (e.g. Encrypt) or target (TrentService.Encrypt)
        #[arg(value_parser = parse_operation)]
        operation: Operation,
        /// HTTP status code of the response
        #[arg(long, default_value = "200")]
        status: u16,
        /// Request ID echoed by the service
        #[arg(long)]
        request_id: Option<String>,
        /// Response body file (stdin if omitted)
        #[arg(long)]
        input: Option<PathBuf>,
    },
}

fn parse_operation(value: &str) -> std::result::Result<Operation, String> {
    Operation::from_target(value)
        .map(Ok)
        .unwrap_or_else(|| value.parse::<Operation>().map_err(|e| e.to_string()))
}

/// Runs `$handler::<Request>(args)` for the request type bound to `$operation`.
macro_rules! with_request_type {
    ($operation:expr, $handler:ident($($arg:expr),* $(,)?)) => {
        match $operation {
            Operation::CreateKey => $handler::<CreateKeyRequest>($($arg),*),
            Operation::DescribeKey => $handler::<DescribeKeyRequest>($($arg),*),
            Operation::ListKeys => $handler::<ListKeysRequest>($($arg),*),
            Operation::EnableKey => $handler::<EnableKeyRequest>($($arg),*),
            Operation::DisableKey => $handler::<DisableKeyRequest>($($arg),*),
            Operation::ScheduleKeyDeletion => $handler::<ScheduleKeyDeletionRequest>($($arg),*),
            Operation::CancelKeyDeletion => $handler::<CancelKeyDeletionRequest>($($arg),*),
            Operation::UpdateKeyDescription => $handler::<UpdateKeyDescriptionRequest>($($arg),*),
            Operation::Encrypt => $handler::<EncryptRequest>($($arg),*),
            Operation::Decrypt => $handler::<DecryptRequest>($($arg),*),
            Operation::ReEncrypt => $handler::<ReEncryptRequest>($($arg),*),
            Operation::GenerateDataKey => $handler::<GenerateDataKeyRequest>($($arg),*),
            Operation::GenerateDataKeyWithoutPlaintext => {
                $handler::<GenerateDataKeyWithoutPlaintextRequest>($($arg),*)
            },
            Operation::GenerateRandom => $handler::<GenerateRandomRequest>($($arg),*),
            Operation::Sign => $handler::<SignRequest>($($arg),*),
            Operation::Verify => $handler::<VerifyRequest>($($arg),*),
            Operation::GetPublicKey => $handler::<GetPublicKeyRequest>($($arg),*),
            Operation::CreateGrant => $handler::<CreateGrantRequest>($($arg),*),
            Operation::ListGrants => $handler::<ListGrantsRequest>($($arg),*),
            Operation::ListRetirableGrants => $handler::<ListRetirableGrantsRequest>($($arg),*),
            Operation::RetireGrant => $handler::<RetireGrantRequest>($($arg),*),
            Operation::RevokeGrant => $handler::<RevokeGrantRequest>($($arg),*),
            Operation::CreateAlias => $handler::<CreateAliasRequest>($($arg),*),
            Operation::DeleteAlias => $handler::<DeleteAliasRequest>($($arg),*),
            Operation::UpdateAlias => $handler::<UpdateAliasRequest>($($arg),*),
            Operation::ListAliases => $handler::<ListAliasesRequest>($($arg),*),
            Operation::TagResource => $handler::<TagResourceRequest>($($arg),*),
            Operation::UntagResource => $handler::<UntagResourceRequest>($($arg),*),
            Operation::ListResourceTags => $handler::<ListResourceTagsRequest>($($arg),*),
            Operation::EnableKeyRotation => $handler::<EnableKeyRotationRequest>($($arg),*),
            Operation::DisableKeyRotation => $handler::<DisableKeyRotationRequest>($($arg),*),
            Operation::GetKeyRotationStatus => $handler::<GetKeyRotationStatusRequest>($($arg),*),
            Operation::RotateKeyOnDemand => $handler::<RotateKeyOnDemandRequest>($($arg),*),
            Operation::GetParametersForImport => {
                $handler::<GetParametersForImportRequest>($($arg),*)
            },
            Operation::ImportKeyMaterial => $handler::<ImportKeyMaterialRequest>($($arg),*),
            Operation::DeleteImportedKeyMaterial => {
                $handler::<DeleteImportedKeyMaterialRequest>($($arg),*)
            },
            Operation::GetKeyPolicy => $handler::<GetKeyPolicyRequest>($($arg),*),
            Operation::PutKeyPolicy => $handler::<PutKeyPolicyRequest>($($arg),*),
            Operation::ListKeyPolicies => $handler::<ListKeyPoliciesRequest>($($arg),*),
        }
    };
}

// ============================================================================
// Helpers
// ============================================================================

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            Ok(buffer)
        },
    }
}

fn to_json<T: Serialize>(value: &T, compact: bool) -> Result<String> {
    let rendered = if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    };
    rendered.context("Failed to render JSON")
}

fn resolve_endpoint(cli: &Cli) -> Result<String> {
    match &cli.endpoint {
        Some(endpoint) => Ok(endpoint.trim_end_matches('/').to_string()),
        None => endpoint_for_region(&cli.region)
            .with_context(|| format!("Cannot resolve endpoint for region {}", cli.region)),
    }
}

fn join_codes(codes: &[ErrorCode]) -> String {
    codes
        .iter()
        .map(ErrorCode::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

// ============================================================================
// Command Handlers
// ============================================================================

fn cmd_operations(compact: bool) -> Result<()> {
    for operation in Operation::VALUES {
        let errors = join_codes(operation.documented_errors());
        if compact {
            println!("{}\t{}\t{}", operation, operation.target(), errors);
        } else {
            println!("{}", operation);
            println!("  Target: {}", operation.target());
            println!("  Errors: {}", errors);
        }
    }
    Ok(())
}

fn cmd_encode<R: KmsRequest>(cli: &Cli, input: &str) -> Result<()> {
    let request: R = serde_json::from_str(input)
        .with_context(|| format!("Invalid {} request", R::OPERATION))?;
    tracing::debug!("Parsed request: {}", request);

    let encoded = encode_request(&request)?;
    let endpoint = resolve_endpoint(cli)?;

    println!("POST {}/", endpoint);
    for (name, value) in encoded.headers() {
        println!("{}: {}", name, value);
    }
    println!();
    if cli.compact {
        println!("{}", encoded.body);
    } else {
        println!("{}", to_json(&request, false)?);
    }

    Ok(())
}

fn cmd_decode<R: KmsRequest>(status: u16, request_id: Option<&str>, input: &str) -> Result<()> {
    match decode_response::<R>(status, request_id, input.as_bytes()) {
        Ok(response) => {
            println!("Operation:  {}", R::OPERATION);
            println!("Status:     {}", response.metadata.status_code);
            if let Some(request_id) = &response.metadata.request_id {
                println!("Request ID: {}", request_id);
            }
            println!("Result:     {}", response.result);
            Ok(())
        },
        Err(ProtocolError::Service(exception)) => {
            let documented = exception
                .error_code()
                .is_some_and(|code| R::OPERATION.documented_errors().contains(&code));

            println!("Operation:  {}", R::OPERATION);
            println!("Status:     {}", exception.status_code());
            if let Some(request_id) = exception.request_id() {
                println!("Request ID: {}", request_id);
            }
            println!("Error code: {}", exception.code());
            println!("Error type: {:?}", exception.error_type());
            println!("Message:    {}", exception.message().unwrap_or("(none)"));
            if !documented {
                tracing::warn!(
                    code = exception.code(),
                    "Error code is not documented for {}",
                    R::OPERATION
                );
            }
            Err(exception)
                .with_context(|| format!("{} returned a service error", R::OPERATION))
        },
        Err(e) => Err(e).with_context(|| format!("Cannot decode {} response", R::OPERATION)),
    }
}

// ============================================================================
// Main
// ============================================================================

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Operations => cmd_operations(cli.compact),
        Commands::Encode { operation, input } => {
            let input = read_input(input.as_deref())?;
            with_request_type!(*operation, cmd_encode(&cli, &input))
        },
        Commands::Decode {
            operation,
            status,
            request_id,
            input,
        } => {
            let input = read_input(input.as_deref())?;
            with_request_type!(
                *operation,
                cmd_decode(*status, request_id.as_deref(), &input)
            )
        },
    }
}
