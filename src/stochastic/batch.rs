//! Batch analyses: run a deterministic analysis on every sample and stack
//! the outputs

use log::{info, log};
use ndarray::{Array2, Array3};

use super::param::RandomValue;
use super::results::{
    StCampbellResults, StForcedResponseResults, StFrequencyResponseResults, StTimeResponseResults,
};
use super::StochasticRotor;
use crate::analysis::{AnalysisOptions, AnalysisType};
use crate::error::{RotorError, RotorResult};
use crate::math::Mat;
use crate::rotor::Rotor;

impl StochasticRotor {
    /// Campbell sweep over every sample with default options
    pub fn run_campbell(&self, speed_range: &[f64]) -> RotorResult<StCampbellResults> {
        self.run_campbell_with(speed_range, &AnalysisOptions::default())
    }

    /// Campbell sweep over every sample
    ///
    /// Output arrays have shape (modes, speeds, samples).
    pub fn run_campbell_with(
        &self,
        speed_range: &[f64],
        options: &AnalysisOptions,
    ) -> RotorResult<StCampbellResults> {
        let results = self.run_samples(AnalysisType::Campbell, options, |_, rotor| {
            rotor.run_campbell(speed_range, options)
        })?;

        let shape = (options.num_modes, speed_range.len(), results.len());
        let wd = Array3::from_shape_fn(shape, |(m, j, i)| results[i].wd[(j, m)]);
        let log_dec = Array3::from_shape_fn(shape, |(m, j, i)| results[i].log_dec[(j, m)]);

        Ok(StCampbellResults {
            speed_range: speed_range.to_vec(),
            wd,
            log_dec,
        })
    }

    /// Transfer function between `inp` and `out` DOFs for every sample
    pub fn run_freq_response(
        &self,
        inp: usize,
        out: usize,
        freq_range: &[f64],
    ) -> RotorResult<StFrequencyResponseResults> {
        self.run_freq_response_with(inp, out, freq_range, &AnalysisOptions::default())
    }

    /// Transfer function for every sample; arrays have shape (frequencies, samples)
    pub fn run_freq_response_with(
        &self,
        inp: usize,
        out: usize,
        freq_range: &[f64],
        options: &AnalysisOptions,
    ) -> RotorResult<StFrequencyResponseResults> {
        let results = self.run_samples(AnalysisType::FrequencyResponse, options, |_, rotor| {
            rotor.run_freq_response(inp, out, freq_range)
        })?;

        let shape = (freq_range.len(), results.len());
        Ok(StFrequencyResponseResults {
            freq_range: freq_range.to_vec(),
            freq_resp: Array2::from_shape_fn(shape, |(j, i)| results[i].freq_resp[j]),
            velc_resp: Array2::from_shape_fn(shape, |(j, i)| results[i].velc_resp[j]),
            accl_resp: Array2::from_shape_fn(shape, |(j, i)| results[i].accl_resp[j]),
        })
    }

    /// Unbalance response for every sample
    ///
    /// `magnitude` (kg·m) and `phase` (rad) are either fixed or hold one value
    /// per sample.
    pub fn run_unbalance_response(
        &self,
        node: usize,
        magnitude: impl Into<RandomValue>,
        phase: impl Into<RandomValue>,
        freq_range: &[f64],
    ) -> RotorResult<StForcedResponseResults> {
        self.run_unbalance_response_with(
            node,
            magnitude,
            phase,
            freq_range,
            &AnalysisOptions::default(),
        )
    }

    /// Unbalance response; arrays have shape (samples, ndof, frequencies)
    pub fn run_unbalance_response_with(
        &self,
        node: usize,
        magnitude: impl Into<RandomValue>,
        phase: impl Into<RandomValue>,
        freq_range: &[f64],
        options: &AnalysisOptions,
    ) -> RotorResult<StForcedResponseResults> {
        let magnitude = magnitude.into();
        let phase = phase.into();
        let size = self.n_samples()?;
        for (key, value) in [("magnitude", &magnitude), ("phase", &phase)] {
            if let Some(found) = value.sample_len() {
                if found != size {
                    return Err(RotorError::ParameterLength {
                        key: key.to_string(),
                        expected: size,
                        found,
                    });
                }
            }
        }

        let results = self.run_samples(AnalysisType::UnbalanceResponse, options, |i, rotor| {
            let m = sample_value(&magnitude, i)?;
            let p = sample_value(&phase, i)?;
            rotor.run_unbalance_response(&[node], &[m], &[p], freq_range)
        })?;

        let ndof = results.first().map_or(0, |r| r.forced_resp.nrows());
        let shape = (results.len(), ndof, freq_range.len());
        Ok(StForcedResponseResults {
            freq_range: freq_range.to_vec(),
            forced_resp: Array3::from_shape_fn(shape, |(i, d, j)| results[i].forced_resp[(d, j)]),
            velc_resp: Array3::from_shape_fn(shape, |(i, d, j)| results[i].velc_resp[(d, j)]),
            accl_resp: Array3::from_shape_fn(shape, |(i, d, j)| results[i].accl_resp[(d, j)]),
        })
    }

    /// Time response for every sample
    ///
    /// # Arguments
    /// * `speed` - Rotor speed in rad/s
    /// * `force` - Forcing, shape (samples, time points, ndof)
    /// * `t` - Equally spaced, strictly increasing time points in s
    pub fn run_time_response(
        &self,
        speed: f64,
        force: &Array3<f64>,
        t: &[f64],
    ) -> RotorResult<StTimeResponseResults> {
        self.run_time_response_with(speed, force, t, &AnalysisOptions::default())
    }

    /// Time response; arrays have shape (samples, time points, DOFs)
    pub fn run_time_response_with(
        &self,
        speed: f64,
        force: &Array3<f64>,
        t: &[f64],
        options: &AnalysisOptions,
    ) -> RotorResult<StTimeResponseResults> {
        let size = self.n_samples()?;
        let (n_force, nt, ndof) = force.dim();
        if n_force != size {
            return Err(RotorError::InvalidInput(format!(
                "forcing holds {n_force} samples, rotor has {size}"
            )));
        }

        let results = self.run_samples(AnalysisType::TimeResponse, options, |i, rotor| {
            let f = Mat::from_fn(nt, ndof, |r, c| force[[i, r, c]]);
            rotor.run_time_response(speed, &f, t)
        })?;

        let ndof = results.first().map_or(0, |r| r.yout.ncols());
        let yout = Array3::from_shape_fn((results.len(), t.len(), ndof), |(i, r, c)| {
            results[i].yout[(r, c)]
        });
        let xout = Array3::from_shape_fn((results.len(), t.len(), 2 * ndof), |(i, r, c)| {
            results[i].xout[(r, c)]
        });

        Ok(StTimeResponseResults {
            time: t.to_vec(),
            yout,
            xout,
        })
    }

    /// Realize every sample in order and analyze it
    ///
    /// The first failing sample aborts the batch.
    fn run_samples<T>(
        &self,
        kind: AnalysisType,
        options: &AnalysisOptions,
        mut analyze: impl FnMut(usize, &Rotor) -> RotorResult<T>,
    ) -> RotorResult<Vec<T>> {
        let samples = self.samples()?;
        let total = samples.len();
        info!("Running {kind} analysis over {total} samples");

        let level = options.sample_level();
        let results = samples
            .enumerate()
            .map(|(i, rotor)| {
                let rotor = rotor?;
                log!(level, "{kind}: sample {}/{}", i + 1, total);
                analyze(i, &rotor)
            })
            .collect::<RotorResult<Vec<_>>>()?;

        info!("Finished {kind} analysis");
        Ok(results)
    }
}

fn sample_value(value: &RandomValue, index: usize) -> RotorResult<f64> {
    value.value_at(index).ok_or(RotorError::SampleOutOfRange {
        index,
        size: value.sample_len().unwrap_or(1),
    })
}
