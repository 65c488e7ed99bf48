//! Closed code sets for ticket status, priority, and source.
//!
//! Freshservice transmits these as bare integers. Each set maps its codes
//! to an English label key; [`Translate`] renders the key for a locale.

use serde::Deserialize;
use thiserror::Error;

use crate::i18n::Translate;

/// An integer is not a member of the expected code set.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{0}")]
pub struct UnsupportedCode(pub &'static str);

macro_rules! code_set {
    (
        $(#[$meta:meta])*
        $name:ident, $unsupported:literal {
            $( $(#[$vmeta:meta])* $variant:ident = $code:literal => $label:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
        #[serde(try_from = "i64")]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $code, )+
        }

        impl $name {
            /// Every member, in code order.
            pub const ALL: &'static [$name] = &[ $( $name::$variant, )+ ];

            /// The integer code sent on the wire.
            pub fn code(self) -> u8 {
                self as u8
            }

            /// Returns true if `code` is a member of this set.
            pub fn is_valid(code: i64) -> bool {
                Self::try_from(code).is_ok()
            }

            /// The untranslated label key.
            pub fn label(self) -> &'static str {
                match self {
                    $( $name::$variant => $label, )+
                }
            }

            /// The label rendered through `translator`.
            pub fn localized_label(self, translator: &impl Translate) -> String {
                translator.translate(self.label())
            }

            /// All `(code, label)` pairs, in code order.
            pub fn available(translator: &impl Translate) -> Vec<(u8, String)> {
                Self::ALL
                    .iter()
                    .map(|member| (member.code(), member.localized_label(translator)))
                    .collect()
            }
        }

        impl TryFrom<i64> for $name {
            type Error = UnsupportedCode;

            fn try_from(code: i64) -> Result<Self, Self::Error> {
                match code {
                    $( $code => Ok($name::$variant), )+
                    _ => Err(UnsupportedCode($unsupported)),
                }
            }
        }

        impl From<$name> for serde_json::Value {
            fn from(member: $name) -> Self {
                serde_json::Value::from(member.code())
            }
        }
    };
}

code_set! {
    /// Ticket status.
    TicketStatus, "Unsupported status" {
        /// Open.
        Open = 2 => "Open",
        /// Waiting on someone.
        Pending = 3 => "Pending",
        /// Resolved.
        Resolved = 4 => "Resolved",
        /// Closed.
        Closed = 5 => "Closed",
    }
}

code_set! {
    /// Ticket priority.
    TicketPriority, "Unsupported priority" {
        /// Low.
        Low = 1 => "Low",
        /// Medium.
        Medium = 2 => "Medium",
        /// High.
        High = 3 => "High",
        /// Urgent.
        Urgent = 4 => "Urgent",
    }
}

code_set! {
    /// Channel through which a ticket was created.
    TicketSource, "Unsupported source type" {
        /// Email.
        Email = 1 => "Email",
        /// Self-service portal.
        Portal = 2 => "Portal",
        /// Phone.
        Phone = 3 => "Phone",
        /// Chat.
        Chat = 4 => "Chat",
        /// Feedback widget.
        FeedbackWidget = 5 => "Feedback widget",
        /// Yammer.
        Yammer = 6 => "Yammer",
        /// AWS Cloudwatch alert.
        AwsCloudwatch = 7 => "AWS Cloudwatch",
        /// PagerDuty alert.
        Pagerduty = 8 => "Pagerduty",
        /// Walk-up.
        Walkup = 9 => "Walkup",
        /// Slack.
        Slack = 10 => "Slack",
    }
}
