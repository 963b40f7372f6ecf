//! Output plugins speaking a transport protocol directly: Fluentd forward,
//! GELF, HTTP, Kafka, Syslog and raw TCP.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::manifests::common::{
    bool_attr, enum_attr, int64_attr, is_empty_map, networking_block, port_attr, secret_block,
    string_attr, string_map_attr, tls_block, Networking, Secret, Tls,
};
use crate::schema::{Block, NestedBlock};
use crate::validators::Validator;

/// Fluentd forward protocol output plugin.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Forward {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_shared_key: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub networking: Option<Networking>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<Secret>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_ack_response: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retain_metadata_in_forward_mode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_hostname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_options: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_as_integer: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls: Option<Tls>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<Secret>,
}

/// Graylog Extended Log Format output plugin.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Gelf {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compress: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_message_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub networking: Option<Networking>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packet_size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_message_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls: Option<Tls>,
}

/// HTTP output plugin.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Http {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_duplicated_headers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compress: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gelf_full_message_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gelf_host_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gelf_level_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gelf_short_message_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gelf_timestamp_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_tag: Option<String>,
    #[serde(default, skip_serializing_if = "is_empty_map")]
    pub headers: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_password: Option<Secret>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_user: Option<Secret>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_date_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_date_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub networking: Option<Networking>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls: Option<Tls>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

/// Apache Kafka output plugin.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Kafka {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brokers: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamic_topic: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_key_field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queue_full_retries: Option<i64>,
    #[serde(default, skip_serializing_if = "is_empty_map")]
    pub rdkafka: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topics: Option<String>,
}

/// Syslog output plugin.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Syslog {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub networking: Option<Networking>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub syslog_appname_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub syslog_facility_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub syslog_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub syslog_hostname_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub syslog_max_size: Option<i64>,
    #[serde(rename(serialize = "syslogMessageIDKey"), skip_serializing_if = "Option::is_none")]
    pub syslog_message_id_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub syslog_message_key: Option<String>,
    #[serde(rename(serialize = "syslogProcessIDKey"), skip_serializing_if = "Option::is_none")]
    pub syslog_process_id_key: Option<String>,
    #[serde(rename(serialize = "syslogSDKey"), skip_serializing_if = "Option::is_none")]
    pub syslog_sd_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub syslog_severity_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls: Option<Tls>,
}

/// Raw TCP output plugin.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Tcp {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_date_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_date_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub networking: Option<Networking>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls: Option<Tls>,
}

pub(super) fn forward_block() -> NestedBlock {
    NestedBlock::single(
        Block::new()
            .with_description("Forward defines the Forward Output plugin.")
            .with_attribute(
                "empty_shared_key",
                bool_attr("Use this option to connect to Fluentd with a zero-length secret."),
            )
            .with_attribute(
                "host",
                string_attr("Target host where Fluent-Bit or Fluentd are listening for Forward messages."),
            )
            .with_block("networking", networking_block())
            .with_block("password", secret_block("Specify the password corresponding to the username."))
            .with_attribute(
                "port",
                port_attr("TCP Port of the target service."),
            )
            .with_attribute(
                "require_ack_response",
                bool_attr("Send \"chunk\"-option and wait for \"ack\" response from server. Enables at-least-once and receiving server can control rate of traffic."),
            )
            .with_attribute(
                "retain_metadata_in_forward_mode",
                bool_attr("RetainMetadataInForwardMode is a boolean that sets whether to preserve metadata in forward mode."),
            )
            .with_attribute(
                "self_hostname",
                string_attr("Default value of the auto-generated certificate common name (CN)."),
            )
            .with_attribute(
                "send_options",
                bool_attr("Always send options (with \"size\"=count of messages)"),
            )
            .with_attribute(
                "shared_key",
                string_attr("A key string known by the remote Fluentd used for authorization."),
            )
            .with_attribute(
                "tag",
                string_attr("Overwrite the tag as we transmit. This allows the receiving pipeline start fresh, or to attribute source."),
            )
            .with_attribute(
                "time_as_integer",
                bool_attr("Set timestamps in integer format, it enable compatibility mode for Fluentd v0.12 series."),
            )
            .with_block("tls", tls_block())
            .with_block("username", secret_block("Specify the username to present to a Fluentd server that enables user_auth."))
    )
}

pub(super) fn gelf_block() -> NestedBlock {
    NestedBlock::single(
        Block::new()
            .with_description("Gelf defines GELF Output configuration.")
            .with_attribute(
                "compress",
                bool_attr("If transport protocol is udp, it defines if UDP packets should be compressed."),
            )
            .with_attribute(
                "full_message_key",
                string_attr("FullMessageKey is the key to use as the long message that can i.e. contain a backtrace."),
            )
            .with_attribute(
                "host",
                string_attr("IP address or hostname of the target Graylog server."),
            )
            .with_attribute(
                "host_key",
                string_attr("HostKey is the key which its value is used as the name of the host, source or application that sent this message."),
            )
            .with_attribute(
                "level_key",
                string_attr("LevelKey is the key to be used as the log level."),
            )
            .with_attribute(
                "mode",
                enum_attr("The protocol to use (tls, tcp or udp).", ["tls", "tcp", "udp"]),
            )
            .with_block("networking", networking_block())
            .with_attribute(
                "packet_size",
                int64_attr("If transport protocol is udp, it sets the size of packets to be sent."),
            )
            .with_attribute(
                "port",
                port_attr("The port that the target Graylog server is listening on."),
            )
            .with_attribute(
                "short_message_key",
                string_attr("ShortMessageKey is the key to use as the short message."),
            )
            .with_attribute(
                "timestamp_key",
                string_attr("TimestampKey is the key which its value is used as the timestamp of the message."),
            )
            .with_block("tls", tls_block())
    )
}

pub(super) fn http_block() -> NestedBlock {
    NestedBlock::single(
        Block::new()
            .with_description("HTTP defines HTTP Output configuration.")
            .with_attribute(
                "allow_duplicated_headers",
                bool_attr("Specify if duplicated headers are allowed. If a duplicated header is found, the latest key/value set is preserved."),
            )
            .with_attribute(
                "compress",
                enum_attr("Set payload compression mechanism. Option available is gzip", ["gzip"]),
            )
            .with_attribute(
                "format",
                enum_attr("Specify the data format to be used in the HTTP request body, by default it uses msgpack. Other supported formats are json, json_stream and json_lines and gelf.", ["msgpack", "json", "json_lines", "json_stream", "gelf"]),
            )
            .with_attribute(
                "gelf_full_message_key",
                string_attr("Specify the key to use for the full message in gelf format"),
            )
            .with_attribute(
                "gelf_host_key",
                string_attr("Specify the key to use for the host in gelf format"),
            )
            .with_attribute(
                "gelf_level_key",
                string_attr("Specify the key to use for the level in gelf format"),
            )
            .with_attribute(
                "gelf_short_message_key",
                string_attr("Specify the key to use as the short message in gelf format"),
            )
            .with_attribute(
                "gelf_timestamp_key",
                string_attr("Specify the key to use for timestamp in gelf format"),
            )
            .with_attribute(
                "header_tag",
                string_attr("Specify an optional HTTP header field for the original message tag."),
            )
            .with_attribute(
                "headers",
                string_map_attr("Add a HTTP header key/value pair. Multiple headers can be set."),
            )
            .with_attribute(
                "host",
                string_attr("IP address or hostname of the target HTTP Server"),
            )
            .with_block("http_password", secret_block("Basic Auth Password. Requires HTTP_User to be set"))
            .with_block("http_user", secret_block("Basic Auth Username"))
            .with_attribute(
                "json_date_format",
                enum_attr("Specify the format of the date. Supported formats are double, epoch and iso8601 (eg: 2018-05-30T09:39:52.000681Z)", ["double", "iso8601", "epoch"]),
            )
            .with_attribute(
                "json_date_key",
                string_attr("Specify the name of the time key in the output record. To disable the time key just set the value to false."),
            )
            .with_block("networking", networking_block())
            .with_attribute(
                "port",
                port_attr("TCP port of the target HTTP Server"),
            )
            .with_attribute(
                "proxy",
                string_attr("Specify an HTTP Proxy. The expected format of this value is http://host:port. Note that https is not supported yet."),
            )
            .with_block("tls", tls_block())
            .with_attribute(
                "uri",
                string_attr("Specify an optional HTTP URI for the target web server, e.g: /something"),
            )
    )
}

pub(super) fn kafka_block() -> NestedBlock {
    NestedBlock::single(
        Block::new()
            .with_description("Kafka defines Kafka Output configuration.")
            .with_attribute(
                "brokers",
                string_attr("Single of multiple list of Kafka Brokers, e.g: 192.168.1.3:9092, 192.168.1.4:9092."),
            )
            .with_attribute(
                "dynamic_topic",
                bool_attr("adds unknown topics (found in Topic_Key) to Topics. So in Topics only a default topic needs to be configured"),
            )
            .with_attribute(
                "format",
                enum_attr("Specify data format, options available: json, msgpack.", ["json", "msgpack", "gelf"]),
            )
            .with_attribute(
                "message_key",
                string_attr("Optional key to store the message"),
            )
            .with_attribute(
                "message_key_field",
                string_attr("If set, the value of Message_Key_Field in the record will indicate the message key. If not set nor found in the record, Message_Key will be used (if set)."),
            )
            .with_attribute(
                "queue_full_retries",
                int64_attr("Fluent Bit queues data into rdkafka library, if for some reason the underlying library cannot flush the records the queue might fills up blocking new addition of records. The queue_full_retries option set the number of local retries to enqueue the data. The default value is 10 times, the interval between each retry is 1 second. Setting the queue_full_retries value to 0 set's an unlimited number of retries.")
                    .with_validator(Validator::at_least(0)),
            )
            .with_attribute(
                "rdkafka",
                string_map_attr("{property} can be any librdkafka properties"),
            )
            .with_attribute(
                "timestamp_format",
                enum_attr("iso8601 or double", ["iso8601", "double"]),
            )
            .with_attribute(
                "timestamp_key",
                string_attr("Set the key to store the record timestamp"),
            )
            .with_attribute(
                "topic_key",
                string_attr("If multiple Topics exists, the value of Topic_Key in the record will indicate the topic to use. E.g: if Topic_Key is router and the record is {\"key1\": 123, \"router\": \"route_2\"}, Fluent Bit will use topic route_2. Note that if the value of Topic_Key is not present in Topics, then by default the first topic in the Topics list will indicate the topic to be used."),
            )
            .with_attribute(
                "topics",
                string_attr("Single entry or list of topics separated by comma (,) that Fluent Bit will use to send messages to Kafka. If only one topic is set, that one will be used for all records. Instead if multiple topics exists, the one set in the record by Topic_Key will be used."),
            )
    )
}

pub(super) fn syslog_block() -> NestedBlock {
    NestedBlock::single(
        Block::new()
            .with_description("Syslog defines Syslog Output configuration.")
            .with_attribute(
                "host",
                string_attr("Host domain or IP address of the remote Syslog server."),
            )
            .with_attribute(
                "mode",
                enum_attr("Mode of the desired transport type, the available options are tcp, tls and udp.", ["tcp", "tls", "udp"]),
            )
            .with_block("networking", networking_block())
            .with_attribute(
                "port",
                port_attr("TCP or UDP port of the remote Syslog server."),
            )
            .with_attribute(
                "syslog_appname_key",
                string_attr("Key name from the original record that contains the application name that generated the message."),
            )
            .with_attribute(
                "syslog_facility_key",
                string_attr("Key from the original record that contains the Syslog facility number."),
            )
            .with_attribute(
                "syslog_format",
                enum_attr("Syslog protocol format to use, the available options are rfc3164 and rfc5424.", ["rfc3164", "rfc5424"]),
            )
            .with_attribute(
                "syslog_hostname_key",
                string_attr("Key name from the original record that contains the hostname that generated the message."),
            )
            .with_attribute(
                "syslog_max_size",
                int64_attr("Maximum size allowed per message, in bytes."),
            )
            .with_attribute(
                "syslog_message_id_key",
                string_attr("Key name from the original record that contains the Message ID associated to the message."),
            )
            .with_attribute(
                "syslog_message_key",
                string_attr("Key key name that contains the message to deliver."),
            )
            .with_attribute(
                "syslog_process_id_key",
                string_attr("Key name from the original record that contains the Process ID that generated the message."),
            )
            .with_attribute(
                "syslog_sd_key",
                string_attr("Key name from the original record that contains the Structured Data (SD) content."),
            )
            .with_attribute(
                "syslog_severity_key",
                string_attr("Key from the original record that contains the Syslog severity number."),
            )
            .with_block("tls", tls_block())
    )
}

pub(super) fn tcp_block() -> NestedBlock {
    NestedBlock::single(
        Block::new()
            .with_description("TCP defines TCP Output configuration.")
            .with_attribute(
                "format",
                enum_attr("Specify the data format to be printed. Supported formats are msgpack json, json_lines and json_stream.", ["msgpack", "json", "json_lines", "json_stream"]),
            )
            .with_attribute(
                "host",
                string_attr("Target host where Fluent-Bit or Fluentd are listening for Forward messages."),
            )
            .with_attribute(
                "json_date_format",
                enum_attr("Specify the format of the date. Supported formats are double, epoch and iso8601 (eg: 2018-05-30T09:39:52.000681Z)", ["double", "iso8601", "epoch"]),
            )
            .with_attribute(
                "json_date_key",
                string_attr("TSpecify the name of the time key in the output record. To disable the time key just set the value to false."),
            )
            .with_block("networking", networking_block())
            .with_attribute(
                "port",
                port_attr("TCP Port of the target service."),
            )
            .with_block("tls", tls_block())
    )
}

#[cfg(test)]
mod tests {
    use super::super::{render_plugin, sorted_keys};
    use serde_json::json;

    #[test]
    fn test_forward_renders_every_field() {
        let forward = render_plugin(
            "forward",
            json!({
                "empty_shared_key": true,
                "host": "host",
                "networking": {"keepalive": "on"},
                "password": {"value_from": {"secret_key_ref": {"key": "password", "name": "credentials"}}},
                "port": 9200,
                "require_ack_response": true,
                "retain_metadata_in_forward_mode": true,
                "self_hostname": "self_hostname",
                "send_options": true,
                "shared_key": "shared_key",
                "tag": "tag",
                "time_as_integer": true,
                "tls": {"verify": true},
                "username": {"value_from": {"secret_key_ref": {"key": "username", "name": "credentials"}}},
            }),
        );

        assert_eq!(
            sorted_keys(&forward),
            [
                "emptySharedKey",
                "host",
                "networking",
                "password",
                "port",
                "requireAckResponse",
                "retainMetadataInForwardMode",
                "selfHostname",
                "sendOptions",
                "sharedKey",
                "tag",
                "timeAsInteger",
                "tls",
                "username",
            ]
        );
    }

    #[test]
    fn test_gelf_renders_every_field() {
        let gelf = render_plugin(
            "gelf",
            json!({
                "compress": true,
                "full_message_key": "full_message_key",
                "host": "host",
                "host_key": "host_key",
                "level_key": "level_key",
                "mode": "tls",
                "networking": {"keepalive": "on"},
                "packet_size": 3,
                "port": 9200,
                "short_message_key": "short_message_key",
                "timestamp_key": "timestamp_key",
                "tls": {"verify": true},
            }),
        );

        assert_eq!(
            sorted_keys(&gelf),
            [
                "compress",
                "fullMessageKey",
                "host",
                "hostKey",
                "levelKey",
                "mode",
                "networking",
                "packetSize",
                "port",
                "shortMessageKey",
                "timestampKey",
                "tls",
            ]
        );
    }

    #[test]
    fn test_http_renders_every_field() {
        let http = render_plugin(
            "http",
            json!({
                "allow_duplicated_headers": true,
                "compress": "gzip",
                "format": "msgpack",
                "gelf_full_message_key": "gelf_full_message_key",
                "gelf_host_key": "gelf_host_key",
                "gelf_level_key": "gelf_level_key",
                "gelf_short_message_key": "gelf_short_message_key",
                "gelf_timestamp_key": "gelf_timestamp_key",
                "header_tag": "header_tag",
                "headers": {"headers": "value"},
                "host": "host",
                "http_password": {"value_from": {"secret_key_ref": {"key": "http_password", "name": "credentials"}}},
                "http_user": {"value_from": {"secret_key_ref": {"key": "http_user", "name": "credentials"}}},
                "json_date_format": "double",
                "json_date_key": "json_date_key",
                "networking": {"keepalive": "on"},
                "port": 9200,
                "proxy": "proxy",
                "tls": {"verify": true},
                "uri": "uri",
            }),
        );

        assert_eq!(
            sorted_keys(&http),
            [
                "allowDuplicatedHeaders",
                "compress",
                "format",
                "gelfFullMessageKey",
                "gelfHostKey",
                "gelfLevelKey",
                "gelfShortMessageKey",
                "gelfTimestampKey",
                "headerTag",
                "headers",
                "host",
                "httpPassword",
                "httpUser",
                "jsonDateFormat",
                "jsonDateKey",
                "networking",
                "port",
                "proxy",
                "tls",
                "uri",
            ]
        );
    }

    #[test]
    fn test_kafka_renders_every_field() {
        let kafka = render_plugin(
            "kafka",
            json!({
                "brokers": "brokers",
                "dynamic_topic": true,
                "format": "json",
                "message_key": "message_key",
                "message_key_field": "message_key_field",
                "queue_full_retries": 2,
                "rdkafka": {"rdkafka": "value"},
                "timestamp_format": "iso8601",
                "timestamp_key": "timestamp_key",
                "topic_key": "topic_key",
                "topics": "topics",
            }),
        );

        assert_eq!(
            sorted_keys(&kafka),
            [
                "brokers",
                "dynamicTopic",
                "format",
                "messageKey",
                "messageKeyField",
                "queueFullRetries",
                "rdkafka",
                "timestampFormat",
                "timestampKey",
                "topicKey",
                "topics",
            ]
        );
    }

    #[test]
    fn test_syslog_renders_every_field() {
        let syslog = render_plugin(
            "syslog",
            json!({
                "host": "host",
                "mode": "tcp",
                "networking": {"keepalive": "on"},
                "port": 9200,
                "syslog_appname_key": "syslog_appname_key",
                "syslog_facility_key": "syslog_facility_key",
                "syslog_format": "rfc3164",
                "syslog_hostname_key": "syslog_hostname_key",
                "syslog_max_size": 3,
                "syslog_message_id_key": "syslog_message_id_key",
                "syslog_message_key": "syslog_message_key",
                "syslog_process_id_key": "syslog_process_id_key",
                "syslog_sd_key": "syslog_sd_key",
                "syslog_severity_key": "syslog_severity_key",
                "tls": {"verify": true},
            }),
        );

        assert_eq!(
            sorted_keys(&syslog),
            [
                "host",
                "mode",
                "networking",
                "port",
                "syslogAppnameKey",
                "syslogFacilityKey",
                "syslogFormat",
                "syslogHostnameKey",
                "syslogMaxSize",
                "syslogMessageIDKey",
                "syslogMessageKey",
                "syslogProcessIDKey",
                "syslogSDKey",
                "syslogSeverityKey",
                "tls",
            ]
        );
        assert_eq!(syslog["syslogMessageIDKey"], "syslog_message_id_key");
        assert_eq!(syslog["syslogProcessIDKey"], "syslog_process_id_key");
        assert_eq!(syslog["syslogSDKey"], "syslog_sd_key");
    }

    #[test]
    fn test_tcp_renders_every_field() {
        let tcp = render_plugin(
            "tcp",
            json!({
                "format": "msgpack",
                "host": "host",
                "json_date_format": "double",
                "json_date_key": "json_date_key",
                "networking": {"keepalive": "on"},
                "port": 9200,
                "tls": {"verify": true},
            }),
        );

        assert_eq!(
            sorted_keys(&tcp),
            ["format", "host", "jsonDateFormat", "jsonDateKey", "networking", "port", "tls"]
        );
    }
}
