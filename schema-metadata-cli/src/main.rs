use std::io::{Read, Write};
use std::path::Path;
use clap::Parser;
use schema_metadata::{
    ColumnMetadata, DatabaseMetadata, DependentColumn, ExtensionMetadata, ForeignKeyMetadata,
    FunctionMetadata, IndexMetadata, InstanceRoleMetadata, Message, ProtoCodec, Result,
    SchemaMetadata, SecretItem, Secrets, TableMetadata, ViewMetadata,
};
use tracing::{debug, instrument};
use tracing_subscriber::EnvFilter;
use crate::cli::{Commands, IoArgs, MessageKind};

mod cli;

/// Runs `$f::<M>($args)` with `M` the message type selected by `$kind`.
macro_rules! with_message_kind {
    ($kind:expr, $f:ident($($arg:expr),*)) => {
        match $kind {
            MessageKind::Database => $f::<DatabaseMetadata>($($arg),*),
            MessageKind::Schema => $f::<SchemaMetadata>($($arg),*),
            MessageKind::Table => $f::<TableMetadata>($($arg),*),
            MessageKind::Column => $f::<ColumnMetadata>($($arg),*),
            MessageKind::View => $f::<ViewMetadata>($($arg),*),
            MessageKind::DependentColumn => $f::<DependentColumn>($($arg),*),
            MessageKind::Function => $f::<FunctionMetadata>($($arg),*),
            MessageKind::Index => $f::<IndexMetadata>($($arg),*),
            MessageKind::Extension => $f::<ExtensionMetadata>($($arg),*),
            MessageKind::ForeignKey => $f::<ForeignKeyMetadata>($($arg),*),
            MessageKind::InstanceRole => $f::<InstanceRoleMetadata>($($arg),*),
            MessageKind::Secrets => $f::<Secrets>($($arg),*),
            MessageKind::SecretItem => $f::<SecretItem>($($arg),*),
        }
    };
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();

    run(cli)?;

    Ok(())
}

#[instrument(skip_all)]
fn run(cli: cli::Cli) -> Result<()> {
    let codec = ProtoCodec::new(cli.codec_options());
    debug!(options = ?codec.options(), "Using codec options");

    match cli.command {
        Commands::Decode {
            io,
            length_delimited,
            pretty,
        } => {
            with_message_kind!(io.kind, do_decode(&codec, &io, length_delimited, pretty))?;
        }
        Commands::Encode {
            io,
            length_delimited,
        } => {
            with_message_kind!(io.kind, do_encode(&codec, &io, length_delimited))?;
        }
        Commands::Normalize { io, pretty } => {
            with_message_kind!(io.kind, do_normalize(&io, pretty))?;
        }
    }

    Ok(())
}

#[instrument(skip_all, fields(message = M::NAME))]
fn do_decode<M: Message>(codec: &ProtoCodec, io: &IoArgs, length_delimited: bool, pretty: bool) -> Result<()> {
    let bytes = read_input(io.input.as_deref())?;

    let message: M = if length_delimited {
        let (message, consumed) = codec.decode_length_delimited::<M>(&bytes)?;
        if consumed < bytes.len() {
            debug!(trailing = bytes.len() - consumed, "Ignoring bytes after the first message");
        }
        message
    } else {
        codec.decode::<M>(&bytes)?
    };

    write_json(io.output.as_deref(), &message, pretty)
}

#[instrument(skip_all, fields(message = M::NAME))]
fn do_encode<M: Message>(codec: &ProtoCodec, io: &IoArgs, length_delimited: bool) -> Result<()> {
    let message = read_json_input::<M>(io.input.as_deref())?;

    let bytes = if length_delimited {
        codec.encode_length_delimited(&message)?
    } else {
        codec.encode(&message)?
    };
    debug!(bytes = bytes.len(), "Encoded message");

    write_output(io.output.as_deref(), &bytes)
}

#[instrument(skip_all, fields(message = M::NAME))]
fn do_normalize<M: Message>(io: &IoArgs, pretty: bool) -> Result<()> {
    let message = read_json_input::<M>(io.input.as_deref())?;
    write_json(io.output.as_deref(), &message, pretty)
}

fn read_input(path: Option<&Path>) -> Result<Vec<u8>> {
    match path {
        Some(path) => Ok(std::fs::read(path)?),
        None => {
            let mut buffer = Vec::new();
            std::io::stdin().read_to_end(&mut buffer)?;
            Ok(buffer)
        }
    }
}

/// JSON input must be valid UTF-8.
fn read_json_input<M: Message>(path: Option<&Path>) -> Result<M> {
    let input = read_input(path)?;
    let value: serde_json::Value = serde_json::from_slice(&input)?;
    M::from_json(&value)
}

fn write_json<M: Message>(path: Option<&Path>, message: &M, pretty: bool) -> Result<()> {
    let json = message.to_json()?;
    let mut text = if pretty {
        serde_json::to_string_pretty(&json)?
    } else {
        serde_json::to_string(&json)?
    };
    text.push('\n');
    write_output(path, text.as_bytes())
}

fn write_output(path: Option<&Path>, bytes: &[u8]) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, bytes)?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(bytes)?;
            stdout.flush()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use schema_metadata::{CodecOptions, Int64Strategy, Message, ProtoCodec, SchemaMetadataError, TableMetadata};
    use crate::cli::{IoArgs, MessageKind};
    use crate::{do_decode, do_encode, do_normalize};

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("schema-metadata-{}-{}", std::process::id(), name))
    }

    fn io(input: &PathBuf, output: &PathBuf) -> IoArgs {
        IoArgs {
            kind: MessageKind::Table,
            input: Some(input.clone()),
            output: Some(output.clone()),
        }
    }

    #[test]
    fn json_to_binary_and_back() {
        let json_in = temp_path("in.json");
        let binary = temp_path("table.bin");
        let json_out = temp_path("out.json");
        std::fs::write(&json_in, r#"{"name": "users", "rowCount": "1000"}"#).unwrap();

        let codec = ProtoCodec::default();
        do_encode::<TableMetadata>(&codec, &io(&json_in, &binary), false).unwrap();
        assert_eq!(
            std::fs::read(&binary).unwrap(),
            vec![0x0a, 0x05, b'u', b's', b'e', b'r', b's', 0x30, 0xe8, 0x07]
        );

        do_decode::<TableMetadata>(&codec, &io(&binary, &json_out), false, false).unwrap();
        let decoded = TableMetadata::from_json_str(&std::fs::read_to_string(&json_out).unwrap()).unwrap();
        assert_eq!(decoded.name, "users");
        assert_eq!(decoded.row_count, 1000);

        for path in [json_in, binary, json_out] {
            let _ = std::fs::remove_file(path);
        }
    }

    #[test]
    fn length_delimited_output_has_a_prefix() {
        let json_in = temp_path("ld.json");
        let binary = temp_path("ld.bin");
        std::fs::write(&json_in, r#"{"name": "t"}"#).unwrap();

        do_encode::<TableMetadata>(&ProtoCodec::default(), &io(&json_in, &binary), true).unwrap();
        assert_eq!(std::fs::read(&binary).unwrap(), vec![0x03, 0x0a, 0x01, b't']);

        for path in [json_in, binary] {
            let _ = std::fs::remove_file(path);
        }
    }

    #[test]
    fn invalid_utf8_in_json_input_is_an_error() {
        let json_in = temp_path("bad-utf8.json");
        let binary = temp_path("bad-utf8.bin");
        std::fs::write(&json_in, b"{\"name\": \"us\xffers\"}").unwrap();

        let result = do_encode::<TableMetadata>(&ProtoCodec::default(), &io(&json_in, &binary), false);
        assert!(matches!(result, Err(SchemaMetadataError::InvalidJson(_))));
        assert!(!binary.exists());

        let _ = std::fs::remove_file(json_in);
    }

    #[test]
    fn json_row_counts_stay_within_safe_integers_under_full() {
        let json_in = temp_path("unsafe.json");
        let binary = temp_path("unsafe.bin");
        std::fs::write(&json_in, r#"{"name": "t", "rowCount": 9007199254740993}"#).unwrap();

        let codec = ProtoCodec::new(CodecOptions {
            int64: Int64Strategy::Full,
            ..CodecOptions::default()
        });
        let result = do_encode::<TableMetadata>(&codec, &io(&json_in, &binary), false);
        assert!(matches!(result, Err(SchemaMetadataError::InvalidJson(_))));

        let _ = std::fs::remove_file(json_in);
    }

    #[test]
    fn normalize_fills_in_defaults() {
        let json_in = temp_path("norm.json");
        let json_out = temp_path("norm.out.json");
        std::fs::write(&json_in, r#"{"name": "t", "indexes": null}"#).unwrap();

        do_normalize::<TableMetadata>(&io(&json_in, &json_out), false).unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&json_out).unwrap()).unwrap();
        assert_eq!(value["indexes"], serde_json::json!([]));
        assert_eq!(value["rowCount"], serde_json::json!(0));
        assert_eq!(value["foreignKeys"], serde_json::json!([]));

        for path in [json_in, json_out] {
            let _ = std::fs::remove_file(path);
        }
    }
}
