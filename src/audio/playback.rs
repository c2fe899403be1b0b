use std::{
    io::Cursor,
    sync::{
        Arc, Mutex, MutexGuard, PoisonError,
        atomic::{AtomicBool, AtomicU64, Ordering},
    },
    thread,
    time::Duration,
};

use flume::Sender;
use rodio::{Decoder, OutputStream, Sink, Source};
use tracing::{debug, error, info};

use crate::{
    audio::{
        error::TransportError,
        traits::{LoadToken, MediaTransport, TransportEvent},
        util::{construct_sink, setup_device_config},
    },
    event::events::Event,
};

type Bytes = Arc<[u8]>;

#[derive(Debug, Default)]
struct LoadSlot {
    generation: u64,
    data: Option<Bytes>,
}

/// Orders load commits against newer loads. Starting a load and committing
/// one both hold the same lock, so once [`LoadGate::begin`] returns no
/// older load can touch the sink.
#[derive(Debug, Default)]
struct LoadGate {
    slot: Mutex<LoadSlot>,
}

impl LoadGate {
    fn lock(&self) -> MutexGuard<'_, LoadSlot> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Supersedes every earlier load. `reset` runs under the lock.
    fn begin(&self, reset: impl FnOnce()) -> u64 {
        let mut slot = self.lock();
        slot.generation += 1;
        slot.data = None;
        reset();
        slot.generation
    }

    /// Runs `apply` under the lock if `generation` is still the latest load.
    fn commit<T>(
        &self,
        generation: u64,
        data: Bytes,
        apply: impl FnOnce() -> T,
    ) -> Result<T, TransportError> {
        let mut slot = self.lock();
        if slot.generation != generation {
            return Err(TransportError::Aborted);
        }
        slot.data = Some(data);
        Ok(apply())
    }

    fn data(&self) -> Option<Bytes> {
        self.lock().data.clone()
    }
}

/// Flags shared between the transport, its load tasks and the monitor thread.
#[derive(Default)]
struct Shared {
    ready: AtomicBool,
    playing: AtomicBool,
    wants_play: AtomicBool,
    duration_bits: AtomicU64,
    gate: LoadGate,
}

impl Shared {
    fn duration(&self) -> f64 {
        f64::from_bits(self.duration_bits.load(Ordering::Relaxed))
    }

    fn set_duration(&self, seconds: f64) {
        self.duration_bits.store(seconds.to_bits(), Ordering::Relaxed);
    }

    fn reset_flags(&self) {
        self.ready.store(false, Ordering::Relaxed);
        self.playing.store(false, Ordering::Relaxed);
        self.wants_play.store(false, Ordering::Relaxed);
        self.set_duration(0.0);
    }
}

/// Streams a song URL over HTTP and plays it on the default output device.
pub struct RodioTransport {
    _stream: OutputStream,
    sink: Arc<Sink>,
    client: reqwest::Client,
    event_tx: Sender<Event>,
    source: Option<String>,
    volume: f32,
    shared: Arc<Shared>,
    current_load_task: Option<tokio::task::JoinHandle<()>>,
}

impl RodioTransport {
    pub fn new(event_tx: Sender<Event>, poll_interval: Duration) -> color_eyre::Result<Self> {
        let (device, stream_config, sample_format) = setup_device_config()?;
        let (stream, sink) = construct_sink(device, &stream_config, sample_format)?;

        let transport = Self {
            _stream: stream,
            sink: Arc::new(sink),
            client: reqwest::Client::new(),
            event_tx,
            source: None,
            volume: 1.0,
            shared: Arc::new(Shared::default()),
            current_load_task: None,
        };
        transport.start_monitor(poll_interval);

        Ok(transport)
    }

    fn start_monitor(&self, poll_interval: Duration) {
        let sink = self.sink.clone();
        let shared = self.shared.clone();
        let event_tx = self.event_tx.clone();

        thread::spawn(move || {
            loop {
                thread::sleep(poll_interval);

                if !shared.playing.load(Ordering::Relaxed) {
                    continue;
                }

                let time = sink.get_pos().as_secs_f64();
                if event_tx
                    .send(Event::Transport(TransportEvent::TimeUpdate(time)))
                    .is_err()
                {
                    break;
                }

                if shared.ready.load(Ordering::Relaxed) && sink.empty() {
                    shared.playing.store(false, Ordering::Relaxed);
                    if event_tx.send(Event::Transport(TransportEvent::Ended)).is_err() {
                        break;
                    }
                }
            }
            debug!("transport_monitor_stopped");
        });
    }

    /// Aborts any load in flight and empties the sink. Returns the
    /// generation of the load that may follow.
    fn stop_current(&mut self) -> u64 {
        if let Some(task) = self.current_load_task.take() {
            task.abort();
        }
        let sink = &self.sink;
        let shared = &self.shared;
        shared.gate.begin(|| {
            sink.stop();
            shared.reset_flags();
        })
    }

    /// Re-appends the last decoded source once it has played to the end.
    fn restart_ended(&self) -> Result<(), TransportError> {
        let data = self.shared.gate.data().ok_or(TransportError::NotReady)?;
        let decoder = decode(data)?;
        self.sink.append(decoder);
        Ok(())
    }
}

impl MediaTransport for RodioTransport {
    fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    fn set_source(&mut self, url: Option<&str>) {
        self.stop_current();
        self.source = url.map(str::to_string);
    }

    fn load(&mut self) -> LoadToken {
        let generation = self.stop_current();
        let token = LoadToken(generation);
        let Some(url) = self.source.clone() else {
            return token;
        };

        let client = self.client.clone();
        let sink = self.sink.clone();
        let shared = self.shared.clone();
        let event_tx = self.event_tx.clone();

        self.current_load_task = Some(tokio::spawn(async move {
            let start = std::time::Instant::now();
            let result = load_source(
                client,
                &url,
                sink,
                shared,
                generation,
                &event_tx,
            )
            .await;

            match result {
                Ok(()) => {
                    info!(
                        url = url.as_str(),
                        elapsed_ms = start.elapsed().as_millis(),
                        "transport_source_ready"
                    );
                    let _ = event_tx.send(Event::Transport(TransportEvent::ReadyToPlay(token)));
                }
                Err(e) if e.is_superseded() => {
                    debug!(url = url.as_str(), "transport_load_superseded")
                }
                Err(e) => error!(url = url.as_str(), error = %e, "transport_load_failed"),
            }
        }));

        token
    }

    fn play(&mut self) -> Result<(), TransportError> {
        if self.source.is_none() {
            return Err(TransportError::NoSource);
        }
        if !self.shared.ready.load(Ordering::Relaxed) {
            // Honoured by the load task once the source is decoded.
            self.shared.wants_play.store(true, Ordering::Relaxed);
            return Ok(());
        }
        if self.sink.empty() {
            self.restart_ended()?;
        }
        self.sink.play();
        self.shared.playing.store(true, Ordering::Relaxed);
        Ok(())
    }

    fn pause(&mut self) {
        self.shared.wants_play.store(false, Ordering::Relaxed);
        self.sink.pause();
        self.shared.playing.store(false, Ordering::Relaxed);
    }

    fn current_time(&self) -> f64 {
        self.sink.get_pos().as_secs_f64()
    }

    fn set_current_time(&mut self, seconds: f64) -> Result<(), TransportError> {
        if !self.shared.ready.load(Ordering::Relaxed) {
            return Err(TransportError::NotReady);
        }
        self.sink
            .try_seek(Duration::from_secs_f64(seconds.max(0.0)))
            .map_err(|e| TransportError::Seek(e.to_string()))
    }

    fn duration(&self) -> f64 {
        self.shared.duration()
    }

    fn volume(&self) -> f32 {
        self.volume
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
        self.sink.set_volume(volume);
    }
}

async fn load_source(
    client: reqwest::Client,
    url: &str,
    sink: Arc<Sink>,
    shared: Arc<Shared>,
    generation: u64,
    event_tx: &Sender<Event>,
) -> Result<(), TransportError> {
    let response = client
        .get(url)
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(|e| TransportError::StreamError(e.to_string()))?;
    let bytes = response
        .bytes()
        .await
        .map_err(|e| TransportError::StreamError(e.to_string()))?;
    let data: Bytes = Arc::from(bytes.as_ref());

    let duration = tokio::task::spawn_blocking(move || {
        let decoder = decode(data.clone())?;
        let duration = decoder.total_duration();

        shared.gate.commit(generation, data, || {
            sink.pause();
            sink.append(decoder);
            if let Some(total) = duration {
                shared.set_duration(total.as_secs_f64());
            }
            shared.ready.store(true, Ordering::Relaxed);
            if shared.wants_play.swap(false, Ordering::Relaxed) {
                sink.play();
                shared.playing.store(true, Ordering::Relaxed);
            }
        })?;
        Ok(duration)
    })
    .await
    .map_err(|e| TransportError::StreamError(e.to_string()))??;

    if let Some(total) = duration {
        let _ = event_tx.send(Event::Transport(TransportEvent::DurationKnown(
            total.as_secs_f64(),
        )));
    }
    Ok(())
}

fn decode(data: Bytes) -> Result<Decoder<Cursor<Bytes>>, TransportError> {
    let byte_len = data.len() as u64;
    Decoder::builder()
        .with_data(Cursor::new(data))
        .with_byte_len(byte_len)
        .with_gapless(true)
        .build()
        .map_err(|e| TransportError::DecodingError(e.to_string()))
}
