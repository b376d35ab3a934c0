//! The lottery state machine.
//!
//! `Open --trigger_draw--> Drawing --fulfill--> Open`, plus
//! `Drawing --reissue_request--> Drawing` when the oracle stays silent.
//! Every operation checks all of its preconditions before touching a field,
//! so a rejected call leaves the account exactly as it was.

use anchor_lang::prelude::*;

use crate::constants::{MAX_ENTRANTS, NUM_WORDS};
use crate::error::LotteryError;
use crate::ports::{PayoutSink, RandomnessPort};
use crate::state::{Lottery, LotteryConfig, Phase, UpkeepStatus};

/// A settled draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawOutcome {
    pub winner: Pubkey,
    pub prize: u64,
    pub request_id: u64,
    pub round: u64,
}

impl LotteryConfig {
    pub fn validate(&self) -> Result<()> {
        require!(self.entrance_fee > 0, LotteryError::InvalidConfig);
        require!(self.interval > 0, LotteryError::InvalidConfig);
        require!(self.draw_timeout > 0, LotteryError::InvalidConfig);
        require!(
            self.randomness.num_words == NUM_WORDS,
            LotteryError::InvalidConfig
        );
        Ok(())
    }
}

impl Lottery {
    /// A fresh lottery, open for entries, with its clock started at `now`.
    pub fn open(bump: u8, authority: Pubkey, config: LotteryConfig, now: i64) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            bump,
            authority,
            config,
            phase: Phase::Open,
            entrants: Vec::new(),
            pot: 0,
            last_draw_timestamp: now,
            draw_requested_at: 0,
            recent_winner: None,
            round: 0,
        })
    }

    pub fn entrance_fee(&self) -> u64 {
        self.config.entrance_fee
    }

    pub fn interval(&self) -> i64 {
        self.config.interval
    }

    pub fn num_words(&self) -> u32 {
        self.config.randomness.num_words
    }

    pub fn request_confirmations(&self) -> u16 {
        self.config.randomness.request_confirmations
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn pending_request_id(&self) -> Option<u64> {
        match self.phase {
            Phase::Open => None,
            Phase::Drawing { request_id } => Some(request_id),
        }
    }

    pub fn entrant_count(&self) -> u32 {
        self.entrants.len() as u32
    }

    pub fn entrant(&self, index: usize) -> Option<Pubkey> {
        self.entrants.get(index).copied()
    }

    pub fn pot(&self) -> u64 {
        self.pot
    }

    pub fn recent_winner(&self) -> Option<Pubkey> {
        self.recent_winner
    }

    pub fn last_draw_timestamp(&self) -> i64 {
        self.last_draw_timestamp
    }

    /// Records one paid entry. Payments above the fee stay in the pot.
    pub fn enter(&mut self, participant: Pubkey, paid: u64) -> Result<()> {
        require!(self.phase == Phase::Open, LotteryError::NotOpen);
        require!(
            paid >= self.config.entrance_fee,
            LotteryError::InsufficientPayment
        );
        require!(self.entrants.len() < MAX_ENTRANTS, LotteryError::LotteryFull);
        let pot = self
            .pot
            .checked_add(paid)
            .ok_or(LotteryError::MathOverflow)?;

        self.entrants.push(participant);
        self.pot = pot;
        Ok(())
    }

    /// Evaluates every draw condition. Never mutates, so keepers may poll it
    /// as often as they like.
    pub fn upkeep_status(&self, now: i64) -> UpkeepStatus {
        let seconds_since_last_draw = now.saturating_sub(self.last_draw_timestamp);
        let is_open = self.phase == Phase::Open;
        let interval_elapsed = seconds_since_last_draw >= self.config.interval;
        let has_entrants = !self.entrants.is_empty();
        let has_balance = self.pot > 0;

        UpkeepStatus {
            upkeep_needed: is_open && interval_elapsed && has_entrants && has_balance,
            is_open,
            interval_elapsed,
            has_entrants,
            has_balance,
            pot: self.pot,
            entrant_count: self.entrant_count(),
            seconds_since_last_draw,
        }
    }

    pub fn check_eligible(&self, now: i64) -> bool {
        self.upkeep_status(now).upkeep_needed
    }

    /// Moves the lottery into drawing and issues one randomness request.
    /// Entrants and pot stay put until the request is fulfilled.
    pub fn trigger_draw<R: RandomnessPort + ?Sized>(
        &mut self,
        now: i64,
        port: &mut R,
    ) -> Result<u64> {
        let status = self.upkeep_status(now);
        if !status.upkeep_needed {
            msg!(
                "Upkeep not needed: phase={:?} pot={} entrants={} seconds_since_last_draw={}",
                self.phase,
                status.pot,
                status.entrant_count,
                status.seconds_since_last_draw
            );
            return err!(LotteryError::UpkeepNotNeeded);
        }

        let request_id = port.request(&self.config.randomness)?;
        self.phase = Phase::Drawing { request_id };
        self.draw_requested_at = now;
        Ok(request_id)
    }

    /// Settles the pending draw: picks `entrants[words[0] % len]`, resets the
    /// round and pays the whole pot through `sink`. A failed payout restores
    /// every field, so the same request can be fulfilled again.
    pub fn fulfill<S: PayoutSink + ?Sized>(
        &mut self,
        request_id: u64,
        random_words: &[u64],
        now: i64,
        sink: &mut S,
    ) -> Result<DrawOutcome> {
        match self.phase {
            Phase::Drawing { request_id: pending } if pending == request_id => {}
            _ => return err!(LotteryError::UnknownRequest),
        }
        let word = *random_words.first().ok_or(LotteryError::NoRandomWords)?;
        let winner_index = word
            .checked_rem(self.entrants.len() as u64)
            .ok_or(LotteryError::MathOverflow)? as usize;
        let winner = self.entrants[winner_index];
        let round = self
            .round
            .checked_add(1)
            .ok_or(LotteryError::MathOverflow)?;

        msg!("Randomness result: {}", word);
        msg!("Entrants: {}", self.entrants.len());
        msg!("Winner: {}", winner_index);

        let snapshot = self.clone();
        let prize = std::mem::take(&mut self.pot);
        self.entrants.clear();
        self.recent_winner = Some(winner);
        self.last_draw_timestamp = now;
        self.phase = Phase::Open;
        self.draw_requested_at = 0;
        self.round = round;

        if let Err(error) = sink.transfer(winner, prize) {
            *self = snapshot;
            msg!("Payout of {} to {} failed: {}", prize, winner, error);
            return err!(LotteryError::PayoutFailed);
        }

        Ok(DrawOutcome {
            winner,
            prize,
            request_id,
            round,
        })
    }

    /// Replaces a pending request the oracle never answered. Returns the
    /// previous and the new identifier.
    pub fn reissue_request<R: RandomnessPort + ?Sized>(
        &mut self,
        caller: Pubkey,
        now: i64,
        port: &mut R,
    ) -> Result<(u64, u64)> {
        require_keys_eq!(caller, self.authority, LotteryError::Unauthorized);
        let previous_request_id = self.pending_request_id().ok_or(LotteryError::NotDrawing)?;
        let age = now.saturating_sub(self.draw_requested_at);
        if age < self.config.draw_timeout {
            msg!(
                "Request {} is {}s old, timeout is {}s",
                previous_request_id,
                age,
                self.config.draw_timeout
            );
            return err!(LotteryError::DrawNotExpired);
        }

        let request_id = port.request(&self.config.randomness)?;
        self.phase = Phase::Drawing { request_id };
        self.draw_requested_at = now;
        Ok((previous_request_id, request_id))
    }
}
