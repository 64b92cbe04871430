#![allow(dead_code)]

use bginfo::data::{DiskUsage, InterfaceAddr, Partition};
use bginfo::platform::{Desktop, SystemProbe};
use bginfo::{BginfoError, Result};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::io;
use std::net::Ipv4Addr;
use std::path::{Path, PathBuf};

pub const GIB: u64 = 1 << 30;

/// Machine with one `C:` drive at 192.168.1.50/24, logged in as CORP\alice
pub struct Workstation {
    pub env: HashMap<String, String>,
    pub drives: Vec<(Partition, Option<DiskUsage>)>,
}

impl Workstation {
    pub fn corp_alice() -> Self {
        let mut env = HashMap::new();
        env.insert("USERDOMAIN".to_string(), "CORP".to_string());
        env.insert("USERNAME".to_string(), "alice".to_string());
        Workstation {
            env,
            drives: vec![(
                Partition {
                    device: "C:".to_string(),
                    mount_point: "C:\\".to_string(),
                    fs_type: "NTFS".to_string(),
                },
                Some(DiskUsage {
                    total: 30 * GIB,
                    used: 10 * GIB,
                    free: 20 * GIB,
                }),
            )],
        }
    }
}

impl SystemProbe for Workstation {
    fn env_var(&self, key: &str) -> Option<String> {
        self.env.get(key).cloned()
    }

    fn partitions(&self) -> Result<Vec<Partition>> {
        Ok(self.drives.iter().map(|(p, _)| p.clone()).collect())
    }

    fn disk_usage(&self, mount_point: &str) -> Result<DiskUsage> {
        self.drives
            .iter()
            .find(|(p, _)| p.mount_point == mount_point)
            .and_then(|(_, u)| *u)
            .ok_or_else(|| BginfoError::StorageQuery {
                mount_point: mount_point.to_string(),
                source: io::Error::new(io::ErrorKind::Other, "not ready"),
            })
    }

    fn memory_total(&self) -> Result<u64> {
        Ok(16 * GIB)
    }

    fn hostname(&self) -> Result<String> {
        Ok("DESK01".to_string())
    }

    fn resolve_ipv4(&self, _host: &str) -> Result<Ipv4Addr> {
        Ok(Ipv4Addr::new(192, 168, 1, 50))
    }

    fn interface_addrs(&self) -> Result<Vec<InterfaceAddr>> {
        Ok(vec![
            InterfaceAddr {
                interface: "lo".to_string(),
                address: Ipv4Addr::LOCALHOST,
                netmask: Some(Ipv4Addr::new(255, 0, 0, 0)),
            },
            InterfaceAddr {
                interface: "eth0".to_string(),
                address: Ipv4Addr::new(192, 168, 1, 50),
                netmask: Some(Ipv4Addr::new(255, 255, 255, 0)),
            },
        ])
    }
}

/// Desktop that records every applied path and can refuse selected calls
#[derive(Default)]
pub struct FakeDesktop {
    pub current: Option<PathBuf>,
    pub applied: RefCell<Vec<PathBuf>>,
    /// 1-based indices of set_background calls that fail
    pub refuse_calls: Vec<usize>,
    pub calls: Cell<usize>,
}

impl FakeDesktop {
    pub fn showing(current: Option<PathBuf>) -> Self {
        FakeDesktop {
            current,
            ..Default::default()
        }
    }
}

impl Desktop for FakeDesktop {
    fn current_background(&self) -> Result<Option<PathBuf>> {
        Ok(self.current.clone())
    }

    fn set_background(&self, path: &Path) -> Result<()> {
        let call = self.calls.get() + 1;
        self.calls.set(call);
        if self.refuse_calls.contains(&call) {
            return Err(BginfoError::Apply {
                code: Some(5),
                message: "access denied".to_string(),
            });
        }
        self.applied.borrow_mut().push(path.to_path_buf());
        Ok(())
    }
}
