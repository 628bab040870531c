use std::str::FromStr;

use datepicker_components::PickerMsg;
use thiserror::Error;

/// One scripted interaction passed with `--step`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Click the trigger button.
    Trigger,
    /// Forward a message to the open popover.
    Msg(PickerMsg),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StepParseError {
    #[error("unknown step `{0}`")]
    Unknown(String),
    #[error("step `{0}` needs an argument, e.g. `{0}:<value>`")]
    MissingArgument(String),
    #[error("step `{0}` takes no argument")]
    UnexpectedArgument(String),
    #[error("`{value}` is not a valid number for step `{step}`")]
    InvalidNumber { step: String, value: String },
}

impl FromStr for Step {
    type Err = StepParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        let (name, argument) = match input.split_once(':') {
            Some((name, argument)) => (name, Some(argument)),
            None => (input, None),
        };

        let text = |argument: Option<&str>| -> Result<String, StepParseError> {
            argument
                .map(str::to_owned)
                .ok_or_else(|| StepParseError::MissingArgument(name.to_owned()))
        };
        let number = |argument: Option<&str>| -> Result<i64, StepParseError> {
            let value = argument.ok_or_else(|| StepParseError::MissingArgument(name.to_owned()))?;
            value.trim().parse::<i64>().map_err(|_| StepParseError::InvalidNumber {
                step: name.to_owned(),
                value: value.to_owned(),
            })
        };
        let day_or_month = |argument: Option<&str>| -> Result<u32, StepParseError> {
            let value = number(argument)?;
            u32::try_from(value).map_err(|_| StepParseError::InvalidNumber {
                step: name.to_owned(),
                value: value.to_string(),
            })
        };
        let bare = |step: Step| match argument {
            Some(_) => Err(StepParseError::UnexpectedArgument(name.to_owned())),
            None => Ok(step),
        };

        match name {
            "trigger" => bare(Step::Trigger),
            "click" => Ok(Step::Msg(PickerMsg::ClickDay(day_or_month(argument)?))),
            "hover" => Ok(Step::Msg(PickerMsg::HoverDay(day_or_month(argument)?))),
            "clear-hover" => bare(Step::Msg(PickerMsg::ClearHover)),
            "prev" => bare(Step::Msg(PickerMsg::PreviousMonth)),
            "next" => bare(Step::Msg(PickerMsg::NextMonth)),
            "years" => bare(Step::Msg(PickerMsg::ToggleYearView)),
            "prev-year" => bare(Step::Msg(PickerMsg::PreviousYear)),
            "next-year" => bare(Step::Msg(PickerMsg::NextYear)),
            "year" => {
                let year = number(argument)?;
                let year = i32::try_from(year).map_err(|_| StepParseError::InvalidNumber {
                    step: name.to_owned(),
                    value: year.to_string(),
                })?;
                Ok(Step::Msg(PickerMsg::SelectYear(year)))
            }
            "month" => Ok(Step::Msg(PickerMsg::SelectMonth(day_or_month(argument)?))),
            "time" => Ok(Step::Msg(PickerMsg::SetTimeText(text(argument)?))),
            "start-date" => Ok(Step::Msg(PickerMsg::SetStartDateText(text(argument)?))),
            "end-date" => Ok(Step::Msg(PickerMsg::SetEndDateText(text(argument)?))),
            "start-time" => Ok(Step::Msg(PickerMsg::SetStartTimeText(text(argument)?))),
            "end-time" => Ok(Step::Msg(PickerMsg::SetEndTimeText(text(argument)?))),
            "apply" => bare(Step::Msg(PickerMsg::Apply)),
            "cancel" => bare(Step::Msg(PickerMsg::Cancel)),
            _ => Err(StepParseError::Unknown(input.to_owned())),
        }
    }
}
