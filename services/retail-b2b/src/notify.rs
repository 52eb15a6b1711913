//! Payment and refund notifications.

use b2bpay_core::{Error, Result};
use chrono::{DateTime, Utc};
use log::debug;
use quick_xml::de;
use serde::Deserialize;

/// A payment or refund event pushed by the platform as XML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PaymentNotify {
    #[serde(rename = "ToUserName")]
    pub to_user_name: String,
    #[serde(rename = "FromUserName")]
    pub from_user_name: String,
    /// Unix timestamp in seconds.
    #[serde(rename = "CreateTime")]
    pub create_time: i64,
    #[serde(rename = "MsgType")]
    pub msg_type: String,
    #[serde(rename = "Event")]
    pub event: String,
    pub appid: String,
    pub mchid: String,
    pub out_trade_no: String,
    pub order_id: String,
    pub out_refund_no: String,
    pub refund_id: String,
}

impl PaymentNotify {
    /// `CreateTime` as a UTC timestamp, `None` when it is out of range.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.create_time, 0)
    }

    /// Whether this notification is about a refund.
    pub fn is_refund(&self) -> bool {
        !self.out_refund_no.is_empty() || !self.refund_id.is_empty()
    }
}

/// Parse the XML body of a notification.
pub fn parse_notify(body: &[u8]) -> Result<PaymentNotify> {
    let content = std::str::from_utf8(body).map_err(|e| {
        Error::serialization("notification is not valid utf-8")
            .with_body(body.to_vec())
            .with_source(e)
    })?;
    let notify: PaymentNotify = de::from_str(content).map_err(|e| {
        Error::serialization("failed to parse notification")
            .with_body(body.to_vec())
            .with_source(e)
    })?;

    debug!(
        "parsed notification {} of mchid {}",
        notify.event, notify.mchid
    );
    Ok(notify)
}

#[cfg(test)]
mod tests {
    use super::*;
    use b2bpay_core::ErrorKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_payment_notify() -> Result<()> {
        let body = br#"<xml>
  <ToUserName><![CDATA[gh_3b1bd1f6ff2c]]></ToUserName>
  <FromUserName><![CDATA[o6_bmjrPTlm6_2sgVt7hMZOPfL2M]]></FromUserName>
  <CreateTime>1700000000</CreateTime>
  <MsgType><![CDATA[event]]></MsgType>
  <Event><![CDATA[retail_pay_notify]]></Event>
  <appid><![CDATA[wx8888888888888888]]></appid>
  <mchid><![CDATA[1230000109]]></mchid>
  <out_trade_no><![CDATA[1217752501201407033233368018]]></out_trade_no>
  <order_id><![CDATA[4200001]]></order_id>
</xml>"#;

        let notify = parse_notify(body)?;
        assert_eq!(notify.to_user_name, "gh_3b1bd1f6ff2c");
        assert_eq!(notify.event, "retail_pay_notify");
        assert_eq!(notify.mchid, "1230000109");
        assert_eq!(notify.out_trade_no, "1217752501201407033233368018");
        assert_eq!(notify.order_id, "4200001");
        assert!(!notify.is_refund());
        assert_eq!(
            notify.created_at().map(|t| t.timestamp()),
            Some(1_700_000_000)
        );
        Ok(())
    }

    #[test]
    fn test_parse_refund_notify() -> Result<()> {
        let body = b"<xml><CreateTime>1700000000</CreateTime><mchid>1230000109</mchid>\
<out_refund_no>R1217752501</out_refund_no><refund_id>5000001</refund_id></xml>";

        let notify = parse_notify(body)?;
        assert!(notify.is_refund());
        assert_eq!(notify.refund_id, "5000001");
        assert_eq!(notify.order_id, "");
        Ok(())
    }

    #[test]
    fn test_parse_malformed_notify() {
        let err = parse_notify(b"<xml><CreateTime>soon</CreateTime></xml>").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Serialization);

        let err = parse_notify(&[0xff, 0xfe]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Serialization);
    }
}
