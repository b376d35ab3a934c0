use anchor_lang::prelude::*;

#[error_code]
pub enum LotteryError {
    #[msg("Payment is below the entrance fee")]
    InsufficientPayment,
    #[msg("Lottery is not open")]
    NotOpen,
    #[msg("Upkeep not needed")]
    UpkeepNotNeeded,
    #[msg("Nonexistent request")]
    UnknownRequest,
    #[msg("Transfer to the winner failed")]
    PayoutFailed,
    #[msg("Not authorized")]
    Unauthorized,
    #[msg("Lottery has no room for more entries this round")]
    LotteryFull,
    #[msg("Math overflow")]
    MathOverflow,
    #[msg("No random words supplied")]
    NoRandomWords,
    #[msg("Invalid lottery configuration")]
    InvalidConfig,
    #[msg("No draw is pending")]
    NotDrawing,
    #[msg("Pending draw has not timed out yet")]
    DrawNotExpired,
    #[msg("Incorrect randomness account")]
    IncorrectRandomnessAccount,
    #[msg("Randomness already revealed")]
    RandomnessAlreadyRevealed,
    #[msg("Randomness not resolved")]
    RandomnessNotResolved,
    #[msg("Instruction does not match the configured randomness provider")]
    ProviderMismatch,
}
