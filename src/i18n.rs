//! Localized user-facing strings
//!
//! The app ships in Turkish, English and Arabic. Services return plain
//! errors and records; rendering to the active language happens here.
//! Only the alarm-manager strings are needed by the core.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Tr,
    En,
    Ar,
}

impl Language {
    /// The code stored under the `app_language` key.
    pub fn code(&self) -> &'static str {
        match self {
            Language::Tr => "tr",
            Language::En => "en",
            Language::Ar => "ar",
        }
    }

    pub fn missing_info_title(&self) -> &'static str {
        match self {
            Language::Tr => "⚠️ Eksik Bilgi",
            Language::En => "⚠️ Missing Info",
            Language::Ar => "⚠️ معلومات ناقصة",
        }
    }

    pub fn missing_info_body(&self) -> &'static str {
        match self {
            Language::Tr => "Lütfen gün, saat ve dakika girin.",
            Language::En => "Please enter day, hour and minute.",
            Language::Ar => "يرجى إدخال اليوم والساعة والدقيقة.",
        }
    }

    pub fn alarm_alert_title(&self) -> &'static str {
        match self {
            Language::Tr => "⏰ Alarm",
            Language::En => "⏰ Alarm",
            Language::Ar => "⏰ منبّه",
        }
    }

    pub fn alarm_scheduled_title(&self) -> &'static str {
        match self {
            Language::Tr => "✅ Alarm Kuruldu",
            Language::En => "✅ Alarm Set",
            Language::Ar => "✅ تم ضبط المنبه",
        }
    }

    /// Confirmation echoing the scheduled day and time back to the user.
    pub fn alarm_scheduled_body(&self, day: &str, hour: &str, minute: &str) -> String {
        match self {
            Language::Tr => format!("{day} günü {hour}:{minute} için alarm ayarlandı."),
            Language::En => format!("Alarm scheduled for {day} at {hour}:{minute}."),
            Language::Ar => format!("تم ضبط المنبه ليوم {day} عند {hour}:{minute}."),
        }
    }
}

impl FromStr for Language {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tr" => Ok(Language::Tr),
            "en" => Ok(Language::En),
            "ar" => Ok(Language::Ar),
            other => Err(AppError::UnsupportedLanguage(other.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
