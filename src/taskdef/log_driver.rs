//! Log drivers accepted in a container's `logConfiguration`

use std::fmt;
use std::str::FromStr;

use crate::error::RenderError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogDriver {
    JsonFile,
    Syslog,
    Journald,
    Logentries,
    Gelf,
    Fluentd,
    Awslogs,
    Splunk,
    Awsfirelens,
}

impl LogDriver {
    /// Every accepted driver, in the order they are reported to users.
    pub const ALL: [LogDriver; 9] = [
        LogDriver::JsonFile,
        LogDriver::Syslog,
        LogDriver::Journald,
        LogDriver::Logentries,
        LogDriver::Gelf,
        LogDriver::Fluentd,
        LogDriver::Awslogs,
        LogDriver::Splunk,
        LogDriver::Awsfirelens,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LogDriver::JsonFile => "json-file",
            LogDriver::Syslog => "syslog",
            LogDriver::Journald => "journald",
            LogDriver::Logentries => "logentries",
            LogDriver::Gelf => "gelf",
            LogDriver::Fluentd => "fluentd",
            LogDriver::Awslogs => "awslogs",
            LogDriver::Splunk => "splunk",
            LogDriver::Awsfirelens => "awsfirelens",
        }
    }

    /// Comma separated list of driver names, used in error messages.
    pub fn valid_options() -> String {
        Self::ALL
            .iter()
            .map(LogDriver::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl fmt::Display for LogDriver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogDriver {
    type Err = RenderError;

    // Driver names are matched exactly; `AWSLOGS` is not `awslogs`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|driver| driver.as_str() == s)
            .ok_or_else(|| RenderError::InvalidLogDriver(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_every_driver() {
        for driver in LogDriver::ALL {
            let parsed: LogDriver = driver.as_str().parse().unwrap();
            assert_eq!(parsed, driver);
        }
    }

    #[test]
    fn test_parse_invalid_driver() {
        let err = "invalid-driver".parse::<LogDriver>().unwrap_err();
        assert!(matches!(err, RenderError::InvalidLogDriver(ref d) if d == "invalid-driver"));
    }

    #[test]
    fn test_driver_names_are_case_sensitive() {
        assert!("AWSLOGS".parse::<LogDriver>().is_err());
    }

    #[test]
    fn test_invalid_driver_message_lists_options() {
        let err = "nope".parse::<LogDriver>().unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("'nope' is invalid logConfigurationLogDriver."));
        assert!(message.contains(
            "json-file,syslog,journald,logentries,gelf,fluentd,awslogs,splunk,awsfirelens"
        ));
    }
}
