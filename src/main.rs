/*++ @file

  Copyright ©2021-2024 Liu Yi, efikarl@yeah.net

  This program is just made available under the terms and conditions of the
  MIT license: http://www.efikarl.com/mit-license.html

  THE PROGRAM IS DISTRIBUTED UNDER THE MIT LICENSE ON AN "AS IS" BASIS,
  WITHOUT WARRANTIES OR REPRESENTATIONS OF ANY KIND, EITHER EXPRESS OR IMPLIED.
--*/

use clap::Parser;
use num_bigint::BigUint;

use rsakit::RsaKeyPair;

#[derive(Parser)]
#[clap(author, version, about = "Generate an RSA key pair and round-trip one message")]
struct Opt {
    /// Width of each prime factor in bits
    #[clap(long, default_value_t = rsakit::DEFAULT_PRIME_BITS)]
    bits: u64,

    /// Miller-Rabin witness rounds per primality check
    #[clap(long, default_value_t = rsakit::DEFAULT_MILLER_RABIN_ROUNDS)]
    rounds: u32,

    /// Message to encrypt, a decimal integer below the modulus
    #[clap(long, default_value = "13")]
    message: BigUint,

    /// Enable debug logging
    #[clap(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let opt = Opt::parse();
    init_log(opt.debug);

    let key = RsaKeyPair::generate_with(opt.bits, opt.rounds, &mut rand::thread_rng())?;
    println!("N = {}", key.modulus());
    println!("e = {}", key.public_exponent());
    println!("d = {}", key.private_exponent());
    println!();

    println!("message:   {}", opt.message);
    let ciphertext = key.encrypt(&opt.message)?;
    println!("encrypted: {ciphertext}");
    let recovered = key.decrypt(&ciphertext)?;
    println!("decrypted: {recovered}");

    Ok(())
}

fn init_log(debug: bool) {
    let level = match debug {
        true => log::LevelFilter::Debug,
        false => log::LevelFilter::Info,
    };
    env_logger::builder().filter_level(level).init();
}
