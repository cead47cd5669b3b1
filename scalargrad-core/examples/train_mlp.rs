//! # Exemple d'Entraînement d'un MLP Scalaire
//!
//! Cet exemple joue le rôle de l'optimiseur externe: le moteur ne fournit
//! que le graphe différentiable et les gradients, la boucle d'entraînement
//! appartient à l'appelant.
//!
//! ## Fonctionnalités Démontrées:
//! 1.  **Construction du réseau** (`MLP::new`), tailles `2 -> 4 -> 1`.
//! 2.  **Perte quadratique** construite avec les opérations du moteur.
//! 3.  **Passe arrière** (`backward`) et accumulation des gradients.
//! 4.  **Mise à jour manuelle** des paramètres via `set_data`.
//! 5.  **Mécanisme `zero_grad`**: remise à zéro entre deux pas.
//!
//! ## Exécution
//! Pour exécuter cet exemple, utilisez la commande :
//! `cargo run --example train_mlp`

use scalargrad_core::nn::{Module, MLP};
use scalargrad_core::Scalar;
use scalargrad_core::ScalarGradError;

fn main() -> Result<(), ScalarGradError> {
    // A classic non-linearly-separable toy problem (XOR).
    let samples: [([f64; 2], f64); 4] = [
        ([0.0, 0.0], 0.0),
        ([0.0, 1.0], 1.0),
        ([1.0, 0.0], 1.0),
        ([1.0, 1.0], 0.0),
    ];

    let mlp = MLP::new(2, &[4, 1])?;
    println!("network: {}", mlp);
    println!("parameters: {}", mlp.parameters().len());

    let learning_rate = 0.05;
    let epochs = 500;

    for epoch in 0..epochs {
        // Sum of squared errors over the whole dataset; building the loss
        // with engine ops keeps it differentiable end to end.
        let mut loss = Scalar::new(0.0);
        for (features, target) in &samples {
            let inputs: Vec<Scalar> = features.iter().map(|v| Scalar::new(*v)).collect();
            let prediction = mlp.forward(&inputs)?.remove(0);
            let error = &prediction - *target;
            loss = &loss + &(&error * &error);
        }

        loss.backward();
        for parameter in mlp.parameters() {
            parameter.set_data(parameter.data() - learning_rate * parameter.grad());
        }
        mlp.zero_grad();

        if epoch % 50 == 0 {
            println!("epoch {:4}: loss = {:.6}", epoch, loss.data());
        }
    }

    println!("--- trained predictions ---");
    for (features, target) in &samples {
        let inputs: Vec<Scalar> = features.iter().map(|v| Scalar::new(*v)).collect();
        let prediction = mlp.forward(&inputs)?.remove(0);
        println!(
            "{:?} -> {:+.4} (target {:+.1})",
            features,
            prediction.data(),
            target
        );
    }

    Ok(())
}
